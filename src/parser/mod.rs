mod errors;
mod statement_parser;

pub use errors::MalformedStatement;
pub use statement_parser::StatementParser;
