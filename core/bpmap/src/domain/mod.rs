//! bpmap 固有のドメイン型（型と不変条件）

pub mod command;
pub mod mode;
pub mod term;

pub use command::MapperCommand;
pub use mode::SearchMode;
pub use term::SearchTerm;
