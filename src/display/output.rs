use crate::analysis::composition::{TeamAnalysis, TeamStats};
use crate::analysis::recommender::Recommendation;
use crate::data::models::Champion;
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RecommendationRow {
    #[tabled(rename = "#")]
    rank: String,
    champion: String,
    tier: String,
    score: String,
    synergy: String,
    counter: String,
    vuln: String,
    flex: String,
}

#[derive(Tabled)]
struct ChampionRow {
    id: String,
    champion: String,
    tier: String,
    viability: String,
    damage: String,
}

pub fn display_recommendations(recommendations: &[Recommendation], role: &str) {
    println!(
        "\n{}",
        format!("🎯 Recommendations for {}", role.to_uppercase())
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    if recommendations.is_empty() {
        println!("{}", "No eligible champions for this role".yellow());
        return;
    }

    let rows: Vec<RecommendationRow> = recommendations
        .iter()
        .enumerate()
        .map(|(idx, rec)| RecommendationRow {
            rank: format!("#{}", idx + 1),
            champion: rec.champion.name.clone(),
            tier: rec.tier_name.clone(),
            score: format!("{:.3}", rec.total_score),
            synergy: format!("{:.2}", rec.synergy_score),
            counter: format!("{:.2}", rec.counter_score),
            vuln: format!("{:.2}", rec.vulnerability_score),
            flex: format!("{:.2}", rec.flex_score),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "Interpretation".bold().yellow());
    println!("• Synergy: Tag synergies with your current team");
    println!("• Counter: Advantage over the enemy picks");
    println!("• Vuln: Exposure to the enemy picks (lower is better)\n");
}

/// Full breakdown of a single recommendation.
pub fn display_recommendation_detail(rec: &Recommendation, lang: &str) {
    let champ = &rec.champion;

    println!("{}", "=".repeat(60).cyan());
    println!(
        "{}",
        format!("🏆 {} - Score: {:.2}", champ.name, rec.total_score).bold().green()
    );
    println!("{}\n", "=".repeat(60).cyan());

    println!("{}", "📊 Component Scores".bold());
    println!("  • Tier: {} ({:.2})", rec.tier_name, rec.tier_score);
    println!("  • Synergy: {:.2}", rec.synergy_score);
    println!("  • Counter: {:.2}", rec.counter_score);
    println!("  • Vulnerability: {:.2}", rec.vulnerability_score);
    println!("  • Role Fit: {:.2}", rec.role_viability);
    println!("  • Flex: {:.2}", rec.flex_score);
    println!(
        "  • Early / Late: {:.2} / {:.2} (balance {:.2})\n",
        rec.early_impact, rec.late_scaling, rec.balance_bonus
    );

    display_champion_info(champ, lang);

    print_section("🤝 Team Synergies", &rec.synergy_explanations);
    print_section("⚔️  Counters Enemy", &rec.counter_explanations);
    print_section("⚠️  Vulnerabilities", &rec.vulnerability_explanations);
}

fn print_section(title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!("{}", title.bold());
    for line in lines {
        println!("  {}", line);
    }
    println!();
}

pub fn display_champion_info(champ: &Champion, lang: &str) {
    println!("{}", "📝 Champion Info".bold());
    let description = champ.description.get(lang);
    if !description.is_empty() {
        println!("  • {}", description);
    }
    println!("  • Damage Type: {}", champ.damage_type);
    println!("  • Power Spike: {}", champ.scaling);
    println!("  • Tier: {}", champ.tier_label());
    if !champ.roles.is_empty() {
        let roles: Vec<String> = champ
            .roles
            .iter()
            .map(|(role, v)| format!("{} {:.0}%", role, v * 100.0))
            .collect();
        println!("  • Roles: {}", roles.join(", "));
    }
    println!("  • Kit Tags: {}\n", champ.kit_tags.join(", "));
}

pub fn display_champions(champions: &[&Champion], role: &str) {
    let rows: Vec<ChampionRow> = champions
        .iter()
        .map(|c| ChampionRow {
            id: c.id.clone(),
            champion: c.name.clone(),
            tier: c.tier_label().to_string(),
            viability: format!("{:.0}%", c.role_viability(role) * 100.0),
            damage: c.damage_type.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_team_stats(label: &str, analysis: &TeamAnalysis, stats: &TeamStats, strength: f64) {
    println!("\n{}", format!("📈 {}", label).bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    println!(
        "{} {:.0}%",
        "Strength:".bold(),
        strength * 100.0
    );
    println!(
        "{} {} AD / {} AP ({}% / {}%)",
        "Damage:".bold(),
        analysis.ad_count.to_string().red(),
        analysis.ap_count.to_string().blue(),
        stats.ad_percent,
        stats.ap_percent
    );
    println!(
        "{} early {:.2} / late {:.2} → {} (balance {:.2})",
        "Power curve:".bold(),
        analysis.early_power,
        analysis.late_power,
        analysis.power_curve.as_str().yellow(),
        analysis.balance_score
    );
    println!(
        "{} {:.0}/100 (0 = early, 100 = late)",
        "Timing:".bold(),
        stats.time_score
    );
    println!(
        "{} {:.1}/3 ({:.0}%)\n",
        "Damage output:".bold(),
        stats.damage_score,
        stats.damage_percent
    );
}

pub fn display_roles(roles: &[String]) {
    println!("\n{}", "🧭 Available roles".bold().cyan());
    for role in roles {
        println!("  • {}", role);
    }
    println!();
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}
