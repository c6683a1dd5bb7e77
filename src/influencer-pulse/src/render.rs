//! Plain-text rendering of a dashboard report.

use pulse_reporting::metrics::InfluencerPerformance;
use pulse_reporting::{DashboardReport, FilterParameters};
use std::fmt::Write;

pub fn render_text(report: &DashboardReport, params: &FilterParameters) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Influencer Marketing Dashboard");
    let _ = writeln!(
        out,
        "Window: {} to {} | Brands: {} | Categories: {}",
        params.start_day,
        params.end_day,
        params.brands.len(),
        params.categories.len()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Campaign Performance Overview");
    let _ = writeln!(out, "  Total Revenue : ₹{:.2}", report.kpis.total_revenue);
    let _ = writeln!(out, "  Total Payout  : ₹{:.2}", report.kpis.total_payout);
    let _ = writeln!(out, "  Total Orders  : {}", report.kpis.total_orders);
    let _ = writeln!(out, "  Overall ROAS  : {:.2}x", report.kpis.overall_roas);
    let _ = writeln!(out);

    if !report.has_data {
        let _ = writeln!(
            out,
            "No data available for the selected filters. Expand the date range or selections."
        );
        return out;
    }

    render_ranking(&mut out, "Top Influencers by Revenue", &report.top_influencers_by_revenue);
    render_ranking(&mut out, "Top Influencers by ROAS", &report.top_influencers_by_roas);

    let _ = writeln!(out, "Revenue by Brand");
    for row in &report.revenue_by_brand {
        let _ = writeln!(out, "  {:<12} ₹{:.2}", row.brand.to_string(), row.revenue);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Revenue by Influencer Category");
    for row in &report.revenue_by_category {
        let _ = writeln!(out, "  {:<12} ₹{:.2}", row.category.to_string(), row.revenue);
    }
    let _ = writeln!(out);

    let active_days = report.daily_revenue.iter().filter(|d| d.revenue > 0.0).count();
    let _ = writeln!(
        out,
        "Daily Revenue Trend: {} days in range, {} with activity",
        report.daily_revenue.len(),
        active_days
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Payout Tracking");
    for row in &report.payout_tracking {
        let _ = writeln!(
            out,
            "  {:<24} {:<9} rate {:>9} orders {:>5} payout ₹{:.2}",
            row.name,
            row.basis.map(|b| b.to_string()).unwrap_or_else(|| "-".into()),
            row.rate.map(|r| format!("{r:.2}")).unwrap_or_else(|| "-".into()),
            row.total_orders_by_influencer
                .map(|o| o.to_string())
                .unwrap_or_else(|| "-".into()),
            row.total_payout.unwrap_or(0.0)
        );
    }

    out
}

fn render_ranking(out: &mut String, title: &str, rows: &[InfluencerPerformance]) {
    let _ = writeln!(out, "{title}");
    for (rank, row) in rows.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {:<24} revenue ₹{:.2}  roas {:.2}x",
            rank + 1,
            row.name.as_deref().unwrap_or(&row.influencer_id),
            row.revenue,
            row.roas
        );
    }
    let _ = writeln!(out);
}
