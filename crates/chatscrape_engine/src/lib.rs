//! Chatscrape engine: saved-page decoding, user-message extraction and
//! report writing.
mod decode;
mod extract;
mod report;
mod rows;
mod select;
mod sink;

pub use decode::{decode_page, DecodeError, DecodedPage};
pub use extract::{extract_transcript, ExtractError, ReportSummary};
pub use report::{format_row, write_header, ReportOptions};
pub use rows::{message_rows, MessageRows, RowText};
pub use select::{marker_source_lines, MessageQuery, QueryError, TextFragment, UserMessage};
pub use sink::{ReportSink, SinkError};
