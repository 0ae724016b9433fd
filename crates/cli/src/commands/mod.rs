pub mod classify;
pub mod init;
pub mod simulate;
pub mod summarize;
