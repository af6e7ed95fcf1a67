//! SVG writing operations.

use std::io::Write;

use anyhow::{Context, Result};

/// In-memory SVG writer. Output is inlined into HTML pages.
pub struct SvgStringWriter {
    buffer: Vec<u8>,
}

impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.buffer.extend_from_slice(buf);
        Ok(())
    }
}

impl Default for SvgStringWriter {
    fn default() -> Self { Self::new() }
}

impl SvgStringWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }

    /// Write the opening <svg> tag with a white background.
    pub fn write_header(&mut self, width: f64, height: f64) -> Result<()> {
        write_svg_header(self, width, height)
    }

    /// Write the shared chart styles.
    pub fn write_styles(&mut self) -> Result<()> {
        write_svg_styles(self)
    }

    /// Write the closing </svg> tag.
    pub fn write_footer(&mut self) -> Result<()> {
        write_svg_footer(self)
    }
}

/// Write SVG header to any writer. No XML declaration: the SVG is embedded in HTML.
pub fn write_svg_header<W: Write>(writer: &mut W, width: f64, height: f64) -> Result<()> {
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img">"##)?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    Ok(())
}

/// Write SVG styles to any writer.
pub fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"<defs>
<style>
    .title {{ font: 600 16px sans-serif; fill: #1f2937; }}
    .label {{ font: 12px sans-serif; fill: #374151; }}
    .tick {{ font: 10px sans-serif; fill: #4b5563; }}
    .axis {{ stroke: #6b7280; stroke-width: 1; }}
    .grid {{ stroke: #e5e7eb; stroke-width: 1; }}
    .state {{ stroke: none; }}
    .state-empty {{ fill: #e5e7eb; fill-opacity: 0.5; stroke: #9ca3af; stroke-width: 0.4; }}
</style>
</defs>"##)?;
    Ok(())
}

/// Write SVG footer to any writer.
pub fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}

/// Escape text for use in XML/HTML content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
