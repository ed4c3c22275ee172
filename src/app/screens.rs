//! Markup for the three screens and the writing overlay. Pure string
//! building so it can be checked without a browser; interactive elements
//! carry `data-action` attributes picked up by the root click listener.

use std::fmt::Write;

use super::action::Action;
use crate::characters::{Character, CharacterSet};
use crate::session::{Feedback, Mode, Score, Session};
use crate::speech::Pronouncer;

pub const STYLE: &str = "
.kc-screen-host{min-height:100vh;background:#000;color:#fff;font-family:'Fira Code',monospace;}
.kc-screen{max-width:56rem;margin:0 auto;padding:1rem;}
.kc-title{text-align:center;margin:4rem 0;}
.kc-title h1{font-size:3.75rem;font-weight:200;letter-spacing:-0.02em;margin:0 0 1rem;}
.kc-title p{font-size:0.75rem;text-transform:uppercase;letter-spacing:0.5em;color:#71717a;}
.kc-sets{display:grid;grid-template-columns:repeat(auto-fit,minmax(12rem,1fr));gap:1.5rem;}
.kc-set{cursor:pointer;user-select:none;text-align:center;padding:2rem;border:1px solid rgba(255,255,255,0.1);border-radius:0.75rem;background:rgba(24,24,27,0.3);}
.kc-set:hover{border-color:rgba(255,255,255,0.3);}
.kc-set-glyph{font-size:3rem;color:#a1a1aa;margin-bottom:1.5rem;}
.kc-set h2{font-size:0.875rem;text-transform:uppercase;letter-spacing:0.1em;margin:0 0 0.5rem;}
.kc-set-count{font-size:0.625rem;text-transform:uppercase;color:#52525b;}
.kc-header{display:flex;justify-content:space-between;align-items:center;margin-bottom:1.5rem;}
.kc-score{font-size:0.75rem;color:#71717a;padding:0.5rem 1rem;border:1px solid rgba(255,255,255,0.05);border-radius:0.25rem;}
.kc-meta{display:flex;justify-content:space-between;font-size:0.625rem;text-transform:uppercase;color:#52525b;}
.kc-progress{height:1px;background:#18181b;margin:0.5rem 0 2rem;}
.kc-progress-bar{height:1px;background:#fff;}
.kc-stage{position:relative;max-width:36rem;margin:0 auto;}
.kc-controls{position:absolute;right:-4rem;top:0;display:flex;flex-direction:column;gap:1rem;}
.kc-round{width:3rem;height:3rem;border-radius:9999px;border:1px solid rgba(255,255,255,0.1);background:transparent;color:#71717a;cursor:pointer;}
.kc-round.kc-active{background:#fff;color:#000;}
.kc-card{cursor:pointer;user-select:none;height:24rem;display:flex;flex-direction:column;align-items:center;justify-content:center;border:1px solid rgba(255,255,255,0.1);border-radius:0.75rem;background:rgba(24,24,27,0.2);transition:all 0.3s;}
.kc-card.kc-correct{border-color:#14532d;background:rgba(20,83,45,0.1);}
.kc-card.kc-incorrect{border-color:#7f1d1d;background:rgba(127,29,29,0.1);transform:translateX(-10px);}
.kc-glyph{font-size:8rem;font-weight:100;margin-bottom:2rem;}
.kc-hint{font-size:0.625rem;text-transform:uppercase;letter-spacing:0.2em;color:#52525b;}
.kc-romaji{font-size:2.25rem;font-weight:300;margin-bottom:1rem;}
.kc-meaning{font-size:1.125rem;color:#a1a1aa;margin-bottom:2rem;}
.kc-glyph-faint{font-size:3.75rem;color:#27272a;}
.kc-answers{display:grid;grid-template-columns:1fr 1fr;gap:1rem;margin-top:2rem;opacity:0;pointer-events:none;transition:all 0.3s;}
.kc-answers.kc-visible{opacity:1;pointer-events:auto;}
.kc-answers button{height:3.5rem;text-transform:uppercase;letter-spacing:0.1em;font-size:0.75rem;cursor:pointer;}
.kc-miss{background:transparent;border:1px solid #27272a;color:#71717a;}
.kc-got{background:#fff;border:1px solid #fff;color:#000;}
.kc-ghost{background:transparent;border:none;color:#71717a;text-transform:uppercase;font-size:0.75rem;letter-spacing:0.1em;cursor:pointer;}
.kc-summary{max-width:36rem;margin:4rem auto;text-align:center;padding:3rem;border:1px solid rgba(255,255,255,0.1);border-radius:0.75rem;}
.kc-summary h2{font-size:0.875rem;text-transform:uppercase;color:#71717a;margin-bottom:3rem;}
.kc-percent{font-size:6rem;font-weight:100;margin-bottom:1rem;}
.kc-summary button{display:block;width:100%;height:3rem;margin-top:0.75rem;text-transform:uppercase;letter-spacing:0.1em;cursor:pointer;}
.kc-overlay{position:fixed;inset:0;z-index:50;background:rgba(0,0,0,0.95);display:flex;flex-direction:column;align-items:center;justify-content:center;padding:0.5rem;}
.kc-overlay-controls{position:absolute;top:1rem;right:1rem;display:flex;gap:1rem;}
.kc-grid{display:grid;grid-template-columns:repeat(5,1fr);gap:0.5rem;width:100%;max-width:98vw;}
.kc-cell{position:relative;aspect-ratio:1;border:2px solid #3f3f46;background:#18181b;border-radius:2px;overflow:hidden;display:flex;align-items:center;justify-content:center;}
.kc-cell-h{position:absolute;top:50%;left:0;width:100%;border-top:2px dashed #3f3f46;pointer-events:none;}
.kc-cell-v{position:absolute;left:50%;top:0;height:100%;border-left:2px dashed #3f3f46;pointer-events:none;}
.kc-guide{font-size:min(12vw,12vh);font-weight:700;line-height:1;pointer-events:none;user-select:none;}
.kc-overlay-romaji{margin-top:2rem;color:#a1a1aa;font-size:1.25rem;letter-spacing:0.5em;text-transform:uppercase;pointer-events:none;}
.kc-surface{position:absolute;inset:0;z-index:10;}
.kc-surface-canvas{display:block;width:100%;height:100%;touch-action:none;cursor:crosshair;}
.kc-surface-clear{position:absolute;bottom:0.25rem;right:0.25rem;font-size:0.625rem;text-transform:uppercase;background:transparent;border:none;color:#71717a;}
";

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Markup for whatever screen the session is on.
pub fn render<P: Pronouncer>(session: &Session<P>) -> String {
    match session.mode() {
        Mode::Unset => render_menu(),
        Mode::Studying(set) => render_study(session, set),
        Mode::Complete(_) => render_complete(session.score()),
    }
}

pub fn render_menu() -> String {
    let mut html = String::from(
        "<div class=\"kc-screen kc-menu\"><div class=\"kc-title\"><h1>JAPANESE</h1>\
         <p>Hiragana • Katakana • Kanji</p></div><div class=\"kc-sets\">",
    );
    for set in CharacterSet::ALL {
        let _ = write!(
            html,
            "<div class=\"kc-set\" data-action=\"{}\"><div class=\"kc-set-glyph\">{}</div>\
             <h2>{}</h2><div class=\"kc-set-count\">{} characters</div></div>",
            Action::Select(set).attr(),
            set.sample_glyph(),
            set.label(),
            set.cards().len()
        );
    }
    html.push_str("</div></div>");
    html
}

fn render_study<P: Pronouncer>(session: &Session<P>, set: CharacterSet) -> String {
    let score = session.score();
    let (position, len) = session.position();
    let card = session.current();
    let mut html = String::from("<div class=\"kc-screen kc-study\">");

    let _ = write!(
        html,
        "<div class=\"kc-header\"><button class=\"kc-ghost\" data-action=\"exit\">↺ Exit</button>\
         <div class=\"kc-score\">{} / {}</div></div>\
         <div class=\"kc-meta\"><span>{}</span><span>{} / {}</span></div>\
         <div class=\"kc-progress\"><div class=\"kc-progress-bar\" style=\"width:{:.2}%\"></div></div>",
        score.correct,
        score.total,
        set.key(),
        position,
        len,
        session.progress_percent()
    );

    let writing_class = if session.is_writing() { " kc-active" } else { "" };
    let _ = write!(
        html,
        "<div class=\"kc-stage\"><div class=\"kc-controls\">\
         <button class=\"kc-round{writing_class}\" data-action=\"toggle-writing\" title=\"Practice writing\">✎</button>\
         <button class=\"kc-round\" data-action=\"audio\" title=\"Play pronunciation\">🔊</button></div>"
    );

    let feedback_class = match session.feedback() {
        Some(Feedback::Correct) => " kc-correct",
        Some(Feedback::Incorrect) => " kc-incorrect",
        None => "",
    };
    let _ = write!(html, "<div class=\"kc-card{feedback_class}\" data-action=\"flip\">");
    html.push_str(&card_face(card, session.is_revealed()));
    html.push_str("</div>");

    let (visible, disabled) = if session.can_answer() { (" kc-visible", "") } else { ("", " disabled") };
    let _ = write!(
        html,
        "<div class=\"kc-answers{visible}\">\
         <button class=\"kc-miss\" data-action=\"{}\"{disabled}>✕ Miss</button>\
         <button class=\"kc-got\" data-action=\"{}\"{disabled}>✓ Got it</button></div>",
        Action::Answer { correct: false }.attr(),
        Action::Answer { correct: true }.attr(),
    );
    html.push_str("</div></div>");
    html
}

fn card_face(card: Option<&Character>, revealed: bool) -> String {
    let glyph = card.map(|c| escape(c.glyph)).unwrap_or_default();
    if !revealed {
        return format!("<div class=\"kc-glyph\">{glyph}</div><p class=\"kc-hint\">Tap to reveal</p>");
    }
    let romaji = card.map(|c| escape(c.romaji)).unwrap_or_default();
    let meaning = card
        .and_then(|c| c.meaning)
        .map(|m| format!("<div class=\"kc-meaning\">{}</div>", escape(m)))
        .unwrap_or_default();
    format!(
        "<div class=\"kc-romaji\">{romaji}</div>{meaning}<div class=\"kc-glyph-faint\">{glyph}</div>"
    )
}

pub fn render_complete(score: Score) -> String {
    format!(
        "<div class=\"kc-screen\"><div class=\"kc-summary\"><h2>Session Complete</h2>\
         <div class=\"kc-percent\">{}%</div><p>{} / {} Correct</p>\
         <button class=\"kc-got\" data-action=\"{}\">Return</button>\
         <button class=\"kc-miss\" data-action=\"{}\">Retry</button></div></div>",
        score.percentage(),
        score.correct,
        score.total,
        Action::Exit.attr(),
        Action::Retry.attr(),
    )
}

/// Handwriting overlay. Cells are tagged `data-cell="<n>"` so surfaces can be
/// mounted into them; the first cell shows the guide glyph.
pub fn render_practice(cells: usize) -> String {
    let mut html = format!(
        "<div class=\"kc-overlay\"><div class=\"kc-overlay-controls\">\
         <button class=\"kc-ghost\" data-action=\"{}\">↺ Clear All</button>\
         <button class=\"kc-ghost\" data-action=\"{}\">✕</button></div><div class=\"kc-grid\">",
        Action::ClearAll.attr(),
        Action::CloseWriting.attr(),
    );
    for i in 0..cells {
        let _ = write!(html, "<div class=\"kc-cell\" data-cell=\"{i}\"><div class=\"kc-cell-h\"></div><div class=\"kc-cell-v\"></div>");
        if i == 0 {
            html.push_str("<span class=\"kc-guide\" data-guide></span>");
        }
        html.push_str("</div>");
    }
    html.push_str("</div><div class=\"kc-overlay-romaji\" data-romaji></div></div>");
    html
}
