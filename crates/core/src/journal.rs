//! Plain-text journal prompt documents.
//!
//! A journal prompt is the downloadable companion to a volume: its title and
//! reflection prompt laid out as a text file the visitor can print or write
//! into.

/// Heading printed at the top of every journal prompt.
pub const JOURNAL_HEADING: &str = "The Living Anthology \u{2014} Journal Prompt";

/// Last line of every journal prompt.
pub const JOURNAL_SIGNATURE: &str = "\u{1F33F} The Living Anthology by R.P8";

/// Suffix appended to the sanitized volume title to form the file name.
const FILENAME_SUFFIX: &str = "_journal_prompt.txt";

const CLOSING_NOTE: &str = "Take your time with these reflections. There are no right or wrong answers,\n\
only your truth waiting to be discovered.";

/// Input for [`render_journal_prompt`].
#[derive(Debug, Clone, Copy)]
pub struct JournalPrompt<'a> {
    pub volume_title: &'a str,
    pub prompt: &'a str,
}

/// Render the text document for a journal prompt.
pub fn render_journal_prompt(input: &JournalPrompt<'_>) -> String {
    format!(
        "{JOURNAL_HEADING}\n\n{title}\n\nReflection Prompt:\n{prompt}\n\n---\n\n\
         {CLOSING_NOTE}\n\n{JOURNAL_SIGNATURE}\n",
        title = input.volume_title,
        prompt = input.prompt,
    )
}

/// Download file name for a volume's journal prompt.
///
/// Every character outside `[A-Za-z0-9]` becomes `_`.
pub fn journal_filename(volume_title: &str) -> String {
    let stem: String = volume_title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("{stem}{FILENAME_SUFFIX}")
}
