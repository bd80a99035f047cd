//! Comment removal for JavaScript and TypeScript sources

use swc_common::{BytePos, FileName, SourceMap, Spanned, comments::SingleThreadedComments};
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StripError {
    #[error("cannot parse source on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Remove every `//` and `/* */` comment from `source`
///
/// The source is parsed so that string, template and regex literals are
/// recognised; a comment marker inside any of them is kept. Everything
/// outside the comment spans, newlines included, is copied unchanged.
pub fn strip_comments(source: &str) -> Result<String, StripError> {
    let source_map = SourceMap::default();
    let source_file = source_map.new_source_file(FileName::Anon.into(), source.to_string());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let comments = SingleThreadedComments::default();
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));
    parser.parse_program().map_err(|e| StripError::Parse {
        line: source_map.lookup_char_pos(e.span().lo).line,
        message: format!("{:?}", e.kind()),
    })?;

    let start = source_file.start_pos;
    let offset = |pos: BytePos| (pos.0 - start.0) as usize;

    let (leading, trailing) = comments.borrow_all();
    let mut spans: Vec<(usize, usize)> = leading
        .iter()
        .chain(trailing.iter())
        .flat_map(|(_, cmts)| cmts.iter())
        .map(|cmt| (offset(cmt.span.lo), offset(cmt.span.hi)))
        .collect();
    spans.sort_unstable();
    spans.dedup();

    let mut output = String::with_capacity(source.len());
    let mut cursor = 0;
    for (lo, hi) in spans {
        // Skip spans already covered by a previous comment
        if lo < cursor || hi > source.len() {
            continue;
        }
        output.push_str(&source[cursor..lo]);
        cursor = hi;
    }
    output.push_str(&source[cursor..]);

    Ok(output)
}
