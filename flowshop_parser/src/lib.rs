// Line oriented `data.` block files

use chumsky::{prelude::*, Parser};
use structs::FlowShopInstance;
use thiserror::Error;

pub mod structs;

#[derive(Debug, Error)]
pub enum FlowShopParseError {
    #[error("ParseError occurred: {}", describe(.0))]
    ParseError(Vec<Simple<char>>),
}

fn describe(errors: &[Simple<char>]) -> String {
    errors
        .iter()
        .map(|err| format!("{err} at {:?}", err.span()))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Parse every `data.` block of a data file.
///
/// Blocks without any job rows are dropped, so the returned indices only count
/// datasets that actually contain jobs.
pub fn parse_flowshop_data(content: &str) -> Result<Vec<FlowShopInstance>, FlowShopParseError> {
    let instances = crate::file_parser()
        .parse(content)
        .map_err(FlowShopParseError::ParseError)?;

    Ok(instances
        .into_iter()
        .filter(|instance| !instance.processing_times.is_empty())
        .collect())
}

fn is_line_char(c: &char) -> bool {
    *c != '\n' && *c != '\r'
}

fn is_inline_whitespace(c: &char) -> bool {
    *c == ' ' || *c == '\t'
}

pub(crate) fn inline_whitespace() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    filter(is_inline_whitespace).repeated().ignored()
}

pub(crate) fn line_end() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    text::newline().or(end())
}

pub(crate) fn header_parser() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    filter(is_line_char)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|line, span| {
            if line.contains("data.") {
                let line = line.trim();
                Ok(line.strip_suffix(':').unwrap_or(line).to_string())
            } else {
                Err(Simple::custom(
                    span,
                    format!("expected a dataset header, found {line:?}"),
                ))
            }
        })
        .labelled("header")
}

pub(crate) fn row_parser() -> impl Parser<char, Vec<u64>, Error = Simple<char>> + Clone {
    let number = filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|digits, span| {
            digits
                .parse::<u64>()
                .map_err(|err| Simple::custom(span, err.to_string()))
        })
        .labelled("processing time");

    inline_whitespace()
        .ignore_then(
            number
                .separated_by(filter(is_inline_whitespace).repeated().at_least(1))
                .allow_trailing()
                .at_least(1),
        )
        .labelled("row")
}

pub(crate) fn dataset_parser() -> impl Parser<char, FlowShopInstance, Error = Simple<char>> + Clone
{
    let dimension_line = filter(is_line_char)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|line, span| {
            let line = line.trim();
            if line.is_empty() || line.contains("data.") {
                Err(Simple::custom(span, "expected a dimension line"))
            } else {
                Ok(line.to_string())
            }
        })
        .labelled("dimension line");

    // A block stops at a blank line, at the end of input or right before the next header.
    let block_end = inline_whitespace()
        .then(line_end())
        .ignored()
        .or(header_parser().rewind().ignored());

    let body = dimension_line
        .then_ignore(line_end())
        .then(row_parser().then_ignore(line_end()).repeated())
        .then_ignore(block_end.clone());

    // header directly followed by the end of its block
    let empty_body = block_end.rewind().to((String::new(), Vec::new()));

    header_parser()
        .then_ignore(line_end())
        .then(body.or(empty_body))
        .map(
            |(name, (dimension_line, processing_times))| FlowShopInstance {
                name,
                dimension_line,
                processing_times,
            },
        )
}

pub(crate) fn file_parser() -> impl Parser<char, Vec<FlowShopInstance>, Error = Simple<char>> {
    let blank_line = inline_whitespace()
        .then(text::newline())
        .to(None::<FlowShopInstance>);

    // Anything outside of a data block, e.g. reference results, is skipped.
    let other_line = filter(is_line_char)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .try_map(|line, span| {
            if line.contains("data.") {
                Err(Simple::custom(span, "unparsable dataset block"))
            } else {
                Ok(line)
            }
        })
        .then_ignore(line_end())
        .to(None::<FlowShopInstance>);

    dataset_parser()
        .map(Some)
        .or(blank_line)
        .or(other_line)
        .repeated()
        .then_ignore(end())
        .map(|sections| sections.into_iter().flatten().collect())
}
