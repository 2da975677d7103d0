//! One-shot hints from rows given on the command line

use crate::core::GuessRow;
use crate::engine::Session;
use crate::error::EngineError;
use crate::wordlists::Dictionary;

/// Parse a row written as `WORD:FEEDBACK` or `WORD FEEDBACK`
///
/// # Errors
/// Returns `InvalidInput` when the separator is missing, or whatever
/// [`GuessRow::parse`] reports for the halves.
pub fn parse_row_arg(arg: &str) -> Result<GuessRow, EngineError> {
    let arg = arg.trim();
    let (word, feedback) = arg
        .split_once(':')
        .or_else(|| arg.split_once(char::is_whitespace))
        .ok_or_else(|| {
            EngineError::InvalidInput(format!("expected WORD:FEEDBACK, got '{arg}'"))
        })?;

    GuessRow::parse(word.trim(), feedback.trim())
}

/// Build a session from `rows`, submitted in order
///
/// # Errors
/// Fails on the first row that does not parse or cannot be submitted.
pub fn session_from_rows<'a, S: AsRef<str>>(
    dictionary: &'a Dictionary,
    rows: &[S],
) -> Result<Session<'a>, EngineError> {
    let mut session = Session::new(dictionary);
    for arg in rows {
        session.submit(parse_row_arg(arg.as_ref())?)?;
    }
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineState;

    #[test]
    fn parses_both_separators() {
        let a = parse_row_arg("crane:G-Y--").unwrap();
        let b = parse_row_arg("  crane   g-y-- ").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "crane G-Y--");
    }

    #[test]
    fn rejects_missing_feedback() {
        assert!(matches!(
            parse_row_arg("crane"),
            Err(EngineError::InvalidInput(_))
        ));
    }

    #[test]
    fn incomplete_word_reports_position() {
        assert_eq!(
            parse_row_arg("cr_ne:G----"),
            Err(EngineError::IncompleteRow { position: 2 })
        );
    }

    #[test]
    fn builds_session_in_order() {
        let dict = Dictionary::from_strs(&["crane", "slate", "plate"]);
        let session = session_from_rows(&dict, &["crane:--G-G", "slate:-GGGG"]).unwrap();

        assert_eq!(session.history().len(), 2);
        assert_eq!(session.candidates().len(), 1);
        assert_eq!(session.state(), EngineState::Collecting);
    }

    #[test]
    fn stops_after_solved() {
        let dict = Dictionary::from_strs(&["crane"]);
        assert_eq!(
            session_from_rows(&dict, &["crane:GGGGG", "crane:-----"]).unwrap_err(),
            EngineError::SessionFinished(EngineState::Solved)
        );
    }
}
