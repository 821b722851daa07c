use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::TemplateError;

/// Indentation used when re-serializing templates.
const INDENT: usize = 2;

fn is_style(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == b"style"
}

fn is_text(e: &BytesStart<'_>) -> bool {
    e.local_name().as_ref() == b"text"
}

fn is_label(e: &BytesStart<'_>) -> bool {
    is_text(e)
        && matches!(e.try_get_attribute("id"), Ok(Some(a)) if a.value.as_ref() == b"label")
}

/// Whitespace-only text spanning a line break, i.e. indentation between
/// elements. A lone space between two `<tspan>`s is content and is kept.
fn is_indentation(e: &BytesText<'_>) -> bool {
    e.iter().all(u8::is_ascii_whitespace) && e.contains(&b'\n')
}

/// Rewrite an SVG document: the content of the first `<style>` element is
/// replaced by `stylesheet`, and the content of the first `<text id="label">`
/// element, if any, by `label`.
///
/// Indentation between elements is dropped and the output is re-indented.
/// The content of every other `<text>` element is copied verbatim, so mixed
/// content like `a <tspan>b</tspan> c` keeps its spacing.
pub fn rewrite(template: &str, stylesheet: &str, label: &str) -> Result<String, TemplateError> {
    let mut reader = Reader::from_str(template);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

    let mut style_done = false;
    let mut label_done = false;
    loop {
        let event = reader.read_event()?;
        let replacement = match &event {
            Event::Start(e) | Event::Empty(e) if !style_done && is_style(e) => {
                style_done = true;
                Some(stylesheet)
            }
            Event::Start(e) | Event::Empty(e) if !label_done && is_label(e) => {
                label_done = true;
                Some(label)
            }
            _ => None,
        };
        match (event, replacement) {
            (Event::Eof, _) => break,
            (Event::Text(e), _) if is_indentation(&e) => {}
            (Event::Start(e), Some(text)) => {
                reader.read_to_end(e.name())?;
                write_element(&mut writer, &e, BytesText::new(text))?;
            }
            (Event::Empty(e), Some(text)) => write_element(&mut writer, &e, BytesText::new(text))?,
            (Event::Start(e), None) if is_text(&e) => {
                let inner = reader.read_text(e.name())?;
                write_element(&mut writer, &e, BytesText::from_escaped(inner))?;
            }
            (event, _) => writer.write_event(event)?,
        }
    }

    if !style_done {
        return Err(TemplateError::MissingStyle);
    }
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Write `start`, `content` and the matching end tag on one line.
fn write_element(
    writer: &mut Writer<Vec<u8>>,
    start: &BytesStart<'_>,
    content: BytesText<'_>,
) -> Result<(), TemplateError> {
    writer.write_event(Event::Start(start.borrow()))?;
    writer.write_event(Event::Text(content))?;
    writer.write_event(Event::End(start.to_end()))?;
    Ok(())
}
