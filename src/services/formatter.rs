//! Text rendering for deals and the terminal check report

use std::fmt::Write;

use crate::types::{Deal, SearchContext, RENTAL_DAYS};

const RULE_WIDTH: usize = 50;

/// Render one deal as a five-line block.
///
/// # Examples
/// ```
/// use car_deals::services::formatter::format_deal_info;
/// use car_deals::types::Deal;
///
/// let deal = Deal::new("Budget", "Economy - Fiat Panda", 78.9, "EUR", "Marseille", 3.9, &["GPS"]);
/// assert!(format_deal_info(&deal).contains("💰 Price: 78.90 EUR (2 days)"));
/// ```
pub fn format_deal_info(deal: &Deal) -> String {
    format!(
        "🚗 {} - {}\n💰 Price: {:.2} {} ({} days)\n📍 Location: {}\n⭐ Rating: {:.1}/5.0\n🔧 Features: {}",
        deal.company,
        deal.car_type,
        deal.price,
        deal.currency,
        RENTAL_DAYS,
        deal.location,
        deal.rating,
        deal.features.join(", ")
    )
}

/// Full report printed by `car-deals check`. The top-deals heading names the
/// requested `limit`, even when fewer deals exist.
pub fn render_report(
    context: &SearchContext,
    cheapest: Option<&Deal>,
    top: &[Deal],
    limit: usize,
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "🔍 Searching for car rentals in {}", context.location);
    let _ = writeln!(out, "📅 Pickup Date: {}", context.pickup_date);
    let _ = writeln!(out, "📅 Return Date: {}", context.return_date);
    let _ = writeln!(out, "⏱️  Duration: {} days", RENTAL_DAYS);
    let _ = writeln!(out, "\n{}", rule);

    match cheapest {
        Some(deal) => {
            let _ = writeln!(out, "🏆 CHEAPEST DEAL FOUND:");
            let _ = writeln!(out, "{}", format_deal_info(deal));
            let _ = writeln!(out, "{}", rule);

            let _ = writeln!(out, "📊 TOP {} CHEAPEST DEALS:", limit);
            for (i, deal) in top.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "\n{}. {} - {:.2} {}",
                    i + 1,
                    deal.company,
                    deal.price,
                    deal.currency
                );
                let _ = writeln!(out, "   {} at {}", deal.car_type, deal.location);
            }
        }
        None => {
            let _ = writeln!(out, "❌ No deals found. Please try again later.");
        }
    }

    let _ = writeln!(out, "\n{}", rule);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn panda() -> Deal {
        Deal::new(
            "Budget",
            "Economy - Fiat Panda",
            78.9,
            "EUR",
            "Marseille City Center",
            3.9,
            &["Air Conditioning", "Manual Transmission"],
        )
    }

    fn context() -> SearchContext {
        SearchContext::starting_from("Marseille, France", NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    // ========== format_deal_info() tests ==========

    #[test]
    fn test_format_deal_info_template() {
        let expected = "🚗 Budget - Economy - Fiat Panda\n\
                        💰 Price: 78.90 EUR (2 days)\n\
                        📍 Location: Marseille City Center\n\
                        ⭐ Rating: 3.9/5.0\n\
                        🔧 Features: Air Conditioning, Manual Transmission";
        assert_eq!(format_deal_info(&panda()), expected);
    }

    #[test]
    fn test_format_whole_rating_keeps_decimal() {
        let mut deal = panda();
        deal.rating = 4.0;
        assert!(format_deal_info(&deal).contains("⭐ Rating: 4.0/5.0"));
    }

    #[test]
    fn test_format_no_features() {
        let mut deal = panda();
        deal.features.clear();
        assert!(format_deal_info(&deal).ends_with("🔧 Features: "));
    }

    #[test]
    fn test_format_rounds_price_to_cents() {
        let mut deal = panda();
        deal.price = 95.8;
        assert!(format_deal_info(&deal).contains("95.80 EUR"));
    }

    // ========== render_report() tests ==========

    #[test]
    fn test_report_header() {
        let report = render_report(&context(), None, &[], 5);
        assert!(report.starts_with("🔍 Searching for car rentals in Marseille, France\n"));
        assert!(report.contains("📅 Pickup Date: 2024-06-02"));
        assert!(report.contains("📅 Return Date: 2024-06-04"));
        assert!(report.contains("Duration: 2 days"));
    }

    #[test]
    fn test_report_without_deals() {
        let report = render_report(&context(), None, &[], 5);
        assert!(report.contains("❌ No deals found. Please try again later."));
        assert!(!report.contains("CHEAPEST DEAL FOUND"));
    }

    #[test]
    fn test_report_lists_top_deals() {
        let cheapest = panda();
        let mut second = panda();
        second.company = "Avis".into();
        second.price = 82.3;
        let top = vec![cheapest.clone(), second];

        let report = render_report(&context(), Some(&cheapest), &top, 2);
        assert!(report.contains("🏆 CHEAPEST DEAL FOUND:"));
        assert!(report.contains("📊 TOP 2 CHEAPEST DEALS:"));
        assert!(report.contains("1. Budget - 78.90 EUR"));
        assert!(report.contains("2. Avis - 82.30 EUR"));
        assert!(report.contains("   Economy - Fiat Panda at Marseille City Center"));
    }

    #[test]
    fn test_report_heading_uses_limit_not_count() {
        let cheapest = panda();
        let report = render_report(&context(), Some(&cheapest), &[cheapest.clone()], 5);
        assert!(report.contains("📊 TOP 5 CHEAPEST DEALS:"));
        assert!(!report.contains("TOP 1 "));
    }
}
