//! Text cards for advice and dashboard views.

use mvp_advice::{AdviceView, DashboardCard, DashboardView, SectionBody};

const LABEL_WIDTH: usize = 18;

/// Render an advice view as a vertical card, one block per region.
pub fn advice_card(view: &AdviceView) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== {} ===\n\n",
        view.medication.as_deref().unwrap_or("Safety plan")
    ));

    for section in &view.sections {
        out.push_str(section.title);
        out.push('\n');
        match &section.body {
            SectionBody::Text(text) => out.push_str(&format!("  {text}\n")),
            SectionBody::Items(items) => {
                for item in items {
                    out.push_str(&format!("  - {item}\n"));
                }
            }
            SectionBody::Placeholder(text) => out.push_str(&format!("  ({text})\n")),
        }
        out.push('\n');
    }

    out
}

pub fn dashboard_cards(view: &DashboardView) -> String {
    match view {
        DashboardView::Empty { message } => format!("{message}\n"),
        DashboardView::Cards { cards } => cards.iter().map(dashboard_card).collect(),
    }
}

fn dashboard_card(card: &DashboardCard) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===", card.medication));
    if !card.dose.is_empty() {
        out.push_str(&format!("  {}", card.dose));
    }
    out.push('\n');

    row(&mut out, "Helpful rating", &format!("{}%", card.helpful_percent));
    row(&mut out, "Helpful", &card.helpful.to_string());
    row(&mut out, "Confusing", &card.confusing.to_string());
    row(&mut out, "Neutral", &card.neutral.to_string());

    if !card.sources.is_empty() {
        out.push_str("Source distribution\n");
        for share in &card.sources {
            row(&mut out, share.label, &format!("{}%", share.percent));
        }
    }

    row(&mut out, "Total feedback", &card.total_feedback.to_string());
    out.push('\n');
    out
}

fn row(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("  {:<width$} {}\n", label, value, width = LABEL_WIDTH));
}
