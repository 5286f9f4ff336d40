//! Calculator entry modes.

use crate::state_enum;

state_enum! {
    /// Where the calculator is in the entry cycle.
    #[derive(Default)]
    pub enum Mode {
        /// The buffer is under active construction
        #[default]
        Entering,
        /// The last `=` succeeded; the buffer is frozen
        ResultShown,
        /// The last `=` failed; only `C`, `⌫` or a fresh digit leave it
        Error,
    }
    error: [Error]
}
