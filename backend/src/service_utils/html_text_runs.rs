//! Splits converted page html into text runs and tags each run in the markup.

use std::cell::{Cell, RefCell};
use std::fmt::Write;

use common::text_highlight::{RUN_INDEX_ATTRIBUTE, TextRun};
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, CharacterTokens, CommentToken, DoctypeToken, EOFToken, EndTag, StartTag, Tag, TagToken, Token,
    TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedPage {
    pub html: String,
    pub text_runs: Vec<TextRun>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextMode {
    Data,
    // script, style: copied verbatim
    RawText,
    // title, textarea: escaped but never a run
    EscapedText,
}

struct RunAnnotator {
    page_number: u32,
    html: RefCell<String>,
    pending_text: RefCell<String>,
    text_runs: RefCell<Vec<TextRun>>,
    text_mode: Cell<TextMode>,
}

impl RunAnnotator {
    fn new(page_number: u32) -> Self {
        Self {
            page_number,
            html: RefCell::new(String::new()),
            pending_text: RefCell::new(String::new()),
            text_runs: RefCell::new(Vec::new()),
            text_mode: Cell::new(TextMode::Data),
        }
    }

    /// Text between two tags is one run, however many character tokens it arrived in.
    fn flush_pending_text(&self) {
        let text = std::mem::take(&mut *self.pending_text.borrow_mut());
        if text.is_empty() {
            return;
        }
        let mut html = self.html.borrow_mut();
        match self.text_mode.get() {
            TextMode::RawText => html.push_str(&text),
            TextMode::EscapedText => push_escaped_text(&mut html, &text),
            TextMode::Data if text.trim().is_empty() => push_escaped_text(&mut html, &text),
            TextMode::Data => {
                let mut text_runs = self.text_runs.borrow_mut();
                let order_index = text_runs.len() as u32;
                let _ = write!(html, "<span {RUN_INDEX_ATTRIBUTE}=\"{order_index}\">");
                push_escaped_text(&mut html, &text);
                html.push_str("</span>");
                text_runs.push(TextRun { content: text, order_index, page_number: self.page_number });
            }
        }
    }
}

impl TokenSink for RunAnnotator {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            TagToken(tag) => {
                self.flush_pending_text();
                write_tag(&mut self.html.borrow_mut(), &tag);
                match tag.kind {
                    StartTag if !tag.self_closing => {
                        if let Some((mode, raw_kind)) = raw_text_mode(&tag.name) {
                            self.text_mode.set(mode);
                            return TokenSinkResult::RawData(raw_kind);
                        }
                    }
                    EndTag => self.text_mode.set(TextMode::Data),
                    _ => {}
                }
            }
            CharacterTokens(text) => self.pending_text.borrow_mut().push_str(&text),
            CommentToken(comment) => {
                self.flush_pending_text();
                let mut html = self.html.borrow_mut();
                html.push_str("<!--");
                html.push_str(&comment);
                html.push_str("-->");
            }
            DoctypeToken(doctype) => {
                self.flush_pending_text();
                let mut html = self.html.borrow_mut();
                html.push_str("<!DOCTYPE ");
                html.push_str(doctype.name.as_deref().unwrap_or("html"));
                html.push('>');
            }
            EOFToken => self.flush_pending_text(),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

fn raw_text_mode(tag_name: &str) -> Option<(TextMode, RawKind)> {
    match tag_name {
        "script" => Some((TextMode::RawText, RawKind::ScriptData)),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some((TextMode::RawText, RawKind::Rawtext)),
        "title" | "textarea" => Some((TextMode::EscapedText, RawKind::Rcdata)),
        _ => None,
    }
}

fn write_tag(html: &mut String, tag: &Tag) {
    match tag.kind {
        StartTag => {
            html.push('<');
            html.push_str(&tag.name);
            for attr in &tag.attrs {
                html.push(' ');
                html.push_str(&attr.name.local);
                html.push_str("=\"");
                push_escaped_attribute(html, &attr.value);
                html.push('"');
            }
            if tag.self_closing {
                html.push_str(" /");
            }
            html.push('>');
        }
        EndTag => {
            html.push_str("</");
            html.push_str(&tag.name);
            html.push('>');
        }
    }
}

fn push_escaped_text(html: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            '\u{a0}' => html.push_str("&nbsp;"),
            c => html.push(c),
        }
    }
}

fn push_escaped_attribute(html: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '"' => html.push_str("&quot;"),
            '\u{a0}' => html.push_str("&nbsp;"),
            c => html.push(c),
        }
    }
}

/// Wraps every non-blank text chunk of `page_html` in a
/// `<span data-run-index="N">` and returns the runs in document order.
pub fn annotate_page_text_runs(page_html: &str, page_number: u32) -> AnnotatedPage {
    let sink = RunAnnotator::new(page_number);

    let input = BufferQueue::default();
    input.push_back(page_html.to_string().into());

    let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    AnnotatedPage {
        html: tokenizer.sink.html.take(),
        text_runs: tokenizer.sink.text_runs.take(),
    }
}
