//! Fixed-width text reports.
//!
//! [`ReportWriter`] renders two kinds of blocks to any `std::io::Write` sink:
//!
//! - **Statistics**: one line per played game and a total line
//! - **Logs**: one line per stored game record (full history or current session)
//!
//! Every block starts with a title line carrying the report date and a rule.
//! The caller owns the sink; the writer never opens or closes files.

mod line;
mod writer;

pub use line::*;
pub use writer::*;
