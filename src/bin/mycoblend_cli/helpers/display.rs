// ABOUTME: Output formatting helpers for mycoblend-cli
// ABOUTME: Renders blend reports and analysis matrices as readable text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 MycoBlend Foods

use mycoblend::{
    AnalysisMatrix, BlendReport, CarbonSummary, ComparisonRow, CostBreakdown, CountryProfile,
    HealthStarLabel, LabelAssessment, NutriScoreLabel, NutrientDelta, RankedCandidate,
    Recommendation, TrafficLightLabel,
};

/// Display a full blend report with every section the report carries
pub fn display_report(report: &BlendReport, profile: &CountryProfile) {
    println!("\n{}", "=".repeat(80));
    println!("MycoBlend Recommendation Report");
    println!("{}", "=".repeat(80));
    println!("   Market:      {} ({} {})", report.country, profile.currency, profile.price_unit);
    println!("   Format:      {}", report.format);
    println!(
        "   Fat ceiling: {:.0}% ({})",
        report.fat_ceiling * 100.0,
        report.cost.reference_trim
    );
    println!("   Priority:    {}", report.priority);

    display_recommendation(&report.recommendation, profile);
    display_claims(report);
    display_comparison(report, profile);
    display_cost(&report.cost);
    display_carbon(&report.carbon);
    if let Some(label) = &report.label {
        display_label(label);
    }
    println!();
}

fn display_recommendation(recommendation: &Recommendation, profile: &CountryProfile) {
    println!("\nRECOMMENDED BLEND:");
    println!("   Recipe: {}", recommendation.recipe_name);
    println!("   Trim:   {}", recommendation.trim);

    let ratios = recommendation.ratios;
    if ratios.water > 0.0 {
        println!(
            "   Mix:    {:.0}% beef / {:.0}% shiitake extract / {:.0}% water",
            ratios.beef * 100.0,
            ratios.extract * 100.0,
            ratios.water * 100.0
        );
    } else {
        println!(
            "   Mix:    {:.0}% beef / {:.0}% shiitake extract",
            ratios.beef * 100.0,
            ratios.extract * 100.0
        );
    }

    if recommendation.pool_empty {
        println!("   Note:   no eligible candidates for this request; showing the default blend");
    } else if recommendation.used_fallback {
        println!(
            "   Note:   no candidate satisfied the hard {} constraint; it was dropped",
            profile.fiber_spelling.to_lowercase()
        );
    }
}

fn display_claims(report: &BlendReport) {
    if report.claims.is_empty() {
        return;
    }
    println!("\nELIGIBLE CLAIMS:");
    for claim in &report.claims {
        println!("   * {}", claim.text);
    }
}

fn display_comparison(report: &BlendReport, profile: &CountryProfile) {
    println!(
        "\nNUTRITION (per 100 g, blend vs 100% beef at {}):",
        report.cost.reference_trim
    );
    println!("   {:<24} {:>12} {:>12}   {}", "", "Blend", "Beef", "Change");
    for row in &report.comparison {
        println!(
            "   {:<24} {:>12} {:>12}   {}",
            row.label,
            format!("{} {}", row.blend_display, row.nutrient.unit()),
            format!("{} {}", row.reference_display, row.nutrient.unit()),
            delta_text(row, profile)
        );
    }
}

fn delta_text(row: &ComparisonRow, profile: &CountryProfile) -> String {
    match &row.delta {
        None => String::new(),
        Some(NutrientDelta::AddedFiber) => {
            format!("ADDED {}", profile.fiber_spelling.to_uppercase())
        }
        Some(NutrientDelta::Unchanged) => "=".into(),
        Some(NutrientDelta::Changed { percent, improved }) => {
            let direction = if *improved { "better" } else { "worse" };
            format!("{percent:+}% ({direction})")
        }
    }
}

fn display_cost(cost: &CostBreakdown) {
    println!("\nCOST ({}):", cost.price_unit);
    for component in &cost.components {
        println!(
            "   {:<22} {:>3.0}%  x  {}{:<8.2} =  {}{:.2}",
            component.ingredient,
            component.share * 100.0,
            cost.currency,
            component.unit_price,
            cost.currency,
            component.cost
        );
    }
    println!("   {:<22} {:>21} {}{:.2}", "Blend total", "", cost.currency, cost.total);
    println!(
        "   Reference: 100% {} at {}{:.2}",
        cost.reference_trim, cost.currency, cost.reference_price
    );
}

fn display_carbon(carbon: &CarbonSummary) {
    println!("\nCARBON (kg CO2e per kg):");
    match carbon.reduction_pct {
        Some(pct) => println!(
            "   Blend: {:.1}   100% beef: {:.1}   Reduction: {pct}%",
            carbon.blend_co2, carbon.beef_co2
        ),
        None => println!("   Blend: {:.1}", carbon.blend_co2),
    }
}

fn display_label(label: &LabelAssessment) {
    match label {
        LabelAssessment::TrafficLight { blend, reference } => {
            println!("\nFRONT-OF-PACK LABEL (UK traffic lights):");
            display_traffic_light("Blend", blend);
            display_traffic_light("Beef", reference);
        }
        LabelAssessment::NutriScore { blend, reference } => {
            println!("\nFRONT-OF-PACK LABEL (Nutri-Score):");
            display_nutri_score("Blend", blend);
            display_nutri_score("Beef", reference);
        }
        LabelAssessment::HealthStar { blend, reference } => {
            println!("\nFRONT-OF-PACK LABEL (Health Star Rating):");
            display_health_star("Blend", blend);
            display_health_star("Beef", reference);
        }
    }
}

fn display_traffic_light(who: &str, label: &TrafficLightLabel) {
    println!(
        "   {who:<6} Energy {:.0} kJ / {:.0} kcal ({}% RI)",
        label.energy_kj, label.energy_kcal, label.energy_ri_pct
    );
    for cell in &label.cells {
        println!(
            "          {:<10} {:>6} g   {:<6} ({}% RI)",
            cell.name,
            cell.display,
            cell.color.to_string().to_uppercase(),
            cell.ri_pct
        );
    }
}

fn display_nutri_score(who: &str, label: &NutriScoreLabel) {
    println!(
        "   {who:<6} Nutri-Score {} (score {}, points A {}, fibre {}, protein {})",
        label.grade, label.score, label.points_a, label.points.fiber, label.points.protein
    );
}

fn display_health_star(who: &str, label: &HealthStarLabel) {
    println!(
        "   {who:<6} {:.1} stars (net score {}, baseline {}, modifying {})",
        label.stars, label.net_score, label.points_a, label.points_c
    );
}

/// Display the per-format analysis matrix with its three ranked sections
pub fn display_matrix(matrix: &AnalysisMatrix, profile: &CountryProfile) {
    println!("\n{}", "=".repeat(80));
    println!(
        "MycoBlend Analysis Matrix (fat ceiling {:.0}%, {} prices)",
        matrix.fat_ceiling * 100.0,
        profile.country
    );
    println!("{}", "=".repeat(80));

    for analysis in &matrix.formats {
        println!("\n{}", analysis.format);
        println!("{}", "-".repeat(80));
        display_section("Balanced picks", &analysis.balanced, profile);
        display_section("Cheapest", &analysis.cheapest, profile);
        display_section("Most nutritious", &analysis.most_nutritious, profile);
        if analysis.used_fallback {
            println!("   Note: hard claim constraints dropped (no candidate satisfied them)");
        }
    }
    println!();
}

fn display_section(title: &str, entries: &[RankedCandidate], profile: &CountryProfile) {
    println!("   {title}:");
    if entries.is_empty() {
        println!("      (no candidates)");
        return;
    }
    for (position, entry) in entries.iter().enumerate() {
        let candidate = &entry.candidate;
        println!(
            "      {}. {} on {}   score {:.3}   {}{:.2}   {:.1} g {}",
            position + 1,
            candidate.recipe_name,
            candidate.trim,
            entry.scores.final_score,
            profile.currency,
            candidate.cost,
            candidate.fiber,
            profile.fiber_spelling.to_lowercase()
        );
    }
}
