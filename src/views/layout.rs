use std::fmt::Write;

use crate::{
    data::{Area, Sex, WorkerType},
    error::DashboardError,
    io::svg::escape_xml,
};
use super::{Selection, View};

pub const APP_TITLE: &str = "Industrial Human Resource Geo-Visualization";

const ACCENT: &str = "#FF5A5F";

const STYLE: &str = "\
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 0 16px; color: #222; }
h1 { font-size: 28px; }
nav { display: flex; gap: 4px; margin-bottom: 16px; }
nav a { padding: 8px 18px; text-decoration: none; color: #333; border-radius: 4px; }
nav a.active { background: ACCENT; color: #fff; }
form.selectors { display: flex; gap: 16px; margin: 12px 0; }
.chart { margin: 18px 0; }
.columns { display: flex; gap: 32px; }
.columns > div { flex: 1; }
.error { border-left: 4px solid ACCENT; background: #fff1f1; padding: 10px 16px; }
.note { color: #666; font-size: 14px; }
";

/// Full HTML document: title, menu with `view` highlighted, that view's
/// selectors, then `body`.
pub fn page(view: View, selection: &Selection, body: &str) -> String {
    let mut html = String::new();
    // writes to a String cannot fail
    let _ = write!(html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} | {view}</title>\n<style>\n{style}</style>\n</head>\n<body>\n<h1>{title}</h1>\n",
        title = escape_xml(APP_TITLE),
        view = view.label(),
        style = STYLE.replace("ACCENT", ACCENT),
    );

    html.push_str("<nav>\n");
    for entry in View::ALL {
        let class = if entry == view { " class=\"active\"" } else { "" };
        let _ = writeln!(html, "<a href=\"{}\"{class}>{}</a>", entry.path(), entry.label());
    }
    html.push_str("</nav>\n");

    html.push_str(&selectors(view, selection));
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");
    html
}

/// User-visible report of a view-local failure.
pub fn error_panel(err: &DashboardError) -> String {
    format!(
        "<div class=\"error\"><strong>{}</strong><p>{}</p></div>\n",
        err.headline(),
        escape_xml(&err.to_string()),
    )
}

fn selectors(view: View, selection: &Selection) -> String {
    let mut form = String::new();
    match view {
        View::Landing => return form,
        View::Overview => {
            select(&mut form, "worker", "Select Worker Type", WorkerType::ALL.map(|ty| (ty.slug(), ty.label())), selection.worker.slug());
        }
        View::Map => {
            select(&mut form, "worker", "Select Worker Type", WorkerType::ALL.map(|ty| (ty.slug(), ty.label())), selection.worker.slug());
            select(&mut form, "sex", "Select Sex", Sex::MAP.map(|sex| (sex.slug(), sex.label())), selection.sex.slug());
            select(&mut form, "area", "Select Area", Area::MAP.map(|area| (area.slug(), area.label())), selection.area.slug());
        }
    }
    format!("<form class=\"selectors\" method=\"get\" action=\"{}\">\n{form}</form>\n", view.path())
}

fn select<const N: usize>(out: &mut String, name: &str, label: &str, options: [(&str, &str); N], current: &str) {
    let _ = writeln!(out, "<label>{label} <select name=\"{name}\" onchange=\"this.form.submit()\">");
    for (value, text) in options {
        let selected = if value == current { " selected" } else { "" };
        let _ = writeln!(out, "<option value=\"{value}\"{selected}>{text}</option>");
    }
    let _ = writeln!(out, "</select></label>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_highlights_current_view() {
        let html = page(View::Overview, &Selection::default(), "<p>body</p>");
        assert!(html.contains("<a href=\"/overview\" class=\"active\">Overview</a>"));
        assert!(html.contains("<a href=\"/\">Home</a>"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn landing_has_no_selectors() {
        let html = page(View::Landing, &Selection::default(), "");
        assert!(!html.contains("<select"));
    }

    #[test]
    fn map_selectors_mark_current_choice() {
        let selection = Selection { worker: WorkerType::Marginal, sex: Sex::Females, area: Area::Urban };
        let html = page(View::Map, &selection, "");
        assert!(html.contains("<option value=\"marginal\" selected>"));
        assert!(html.contains("<option value=\"females\" selected>"));
        assert!(html.contains("<option value=\"urban\" selected>"));
        assert!(!html.contains("value=\"persons\""));
    }

    #[test]
    fn error_panel_shows_headline_and_column() {
        let html = error_panel(&DashboardError::MissingColumn("Marginal Workers - Urban - Females".into()));
        assert!(html.contains("Column not found"));
        assert!(html.contains("Marginal Workers - Urban - Females"));
    }
}
