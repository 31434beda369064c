//! Text renderer for the desktop build.
//!
//! Each paint writes one framed block to the wrapped writer. A failed write
//! is logged and dropped; the navigator never learns about it.

use std::io::{self, Write};

use platform::{ListView, NowPlayingView, Renderer};

const RULE: &str = "----------------------------------------";

/// [`Renderer`] writing plain-text screens to `W`.
pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
    backlight: bool,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            backlight: true,
        }
    }

    pub fn backlight(&self) -> bool {
        self.backlight
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn write_list(&mut self, view: &ListView<'_>) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        if view.centered {
            writeln!(self.out, "{:^40}", view.title)?;
        } else {
            writeln!(self.out, "{}", view.title)?;
        }
        writeln!(self.out, "{RULE}")?;
        for (row, text) in view.rows.iter().enumerate() {
            let marker = if view.selected_row == Some(row) { '>' } else { ' ' };
            if view.centered {
                writeln!(self.out, "{marker}{:^39}", text.as_str())?;
            } else {
                writeln!(self.out, "{marker} {}", text.as_str())?;
            }
        }
        self.out.flush()
    }

    fn write_now_playing(&mut self, view: &NowPlayingView<'_>) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "  {}", view.song)?;
        writeln!(self.out, "  {} / {}", view.artist, view.album)?;
        let looping = if view.looping { "loop on" } else { "loop off" };
        writeln!(self.out, "  vol {}%  {looping}", view.volume.get())?;
        if view.overlay {
            writeln!(self.out, "  [-] vol down  [+] vol up  [back] loop  [select] resume")?;
        }
        self.out.flush()
    }

    fn write_message(&mut self, lines: &[&str]) -> io::Result<()> {
        writeln!(self.out, "{RULE}")?;
        for line in lines {
            writeln!(self.out, "{line:^40}")?;
        }
        self.out.flush()
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn paint_list(&mut self, view: &ListView<'_>) {
        if let Err(err) = self.write_list(view) {
            tracing::warn!(%err, "console write failed");
        }
    }

    fn now_playing(&mut self, view: &NowPlayingView<'_>) {
        if let Err(err) = self.write_now_playing(view) {
            tracing::warn!(%err, "console write failed");
        }
    }

    fn message(&mut self, lines: &[&str]) {
        if let Err(err) = self.write_message(lines) {
            tracing::warn!(%err, "console write failed");
        }
    }

    fn set_backlight(&mut self, on: bool) {
        self.backlight = on;
        let note = if on { "[display on]" } else { "[display off]" };
        if let Err(err) = writeln!(self.out, "{note}") {
            tracing::warn!(%err, "console write failed");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use platform::{Row, VolumePercent};

    fn text(r: &ConsoleRenderer<Vec<u8>>) -> String {
        String::from_utf8(r.writer().clone()).unwrap()
    }

    fn rows(items: &[&str]) -> heapless::Vec<Row, { platform::config::MAX_PAGE_SIZE }> {
        items.iter().map(|s| Row::try_from(*s).unwrap()).collect()
    }

    #[test]
    fn test_list_marks_selected_row() {
        let mut r = ConsoleRenderer::new(Vec::new());
        r.paint_list(&ListView {
            title: "Artists",
            rows: rows(&["A", "B"]),
            selected_row: Some(1),
            centered: false,
        });
        let out = text(&r);
        assert!(out.contains("Artists"));
        assert!(out.contains("  A\n"));
        assert!(out.contains("> B\n"));
    }

    #[test]
    fn test_now_playing_overlay_lists_actions() {
        let mut r = ConsoleRenderer::new(Vec::new());
        r.now_playing(&NowPlayingView {
            artist: "A",
            album: "X",
            song: "1",
            volume: VolumePercent::default(),
            looping: true,
            overlay: true,
        });
        let out = text(&r);
        assert!(out.contains("A / X"));
        assert!(out.contains("vol 50%  loop on"));
        assert!(out.contains("[select] resume"));
    }

    #[test]
    fn test_backlight_tracked() {
        let mut r = ConsoleRenderer::new(Vec::new());
        r.set_backlight(false);
        assert!(!r.backlight());
        assert!(text(&r).contains("[display off]"));
    }
}
