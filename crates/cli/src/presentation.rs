// crates/cli/src/presentation.rs
use std::io::{self, Write};
use topwords_engine::aggregate::WordCount;

/// Print up to `limit` words to stdout.
///
/// # Errors
///
/// Fails only when stdout cannot be written.
pub fn print_results(words: &[WordCount], limit: usize) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, words, limit)?;
    out.flush()
}

/// Write `<count> <word>` lines, the count right-aligned to the width of the
/// first (largest) count.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_results<W: Write>(out: &mut W, words: &[WordCount], limit: usize) -> io::Result<()> {
    let Some(first) = words.first() else {
        return Ok(());
    };
    let width = first.count_width();

    for w in words.iter().take(limit) {
        writeln!(out, "{:>width$} {}", w.count, w.value)?;
    }
    log::debug!("printed {} of {} words", limit.min(words.len()), words.len());
    Ok(())
}
