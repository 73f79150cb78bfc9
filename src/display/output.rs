use crate::analysis::queries::{BowlingLine, ScoreLine, WinMargin};
use crate::analysis::report::DashboardReport;
use crate::analysis::tally::Ranked;
use colored::*;
use std::fmt;
use tabled::{settings::Style, Table, Tabled};

const BAR_WIDTH: usize = 30;

#[derive(Tabled)]
struct BarRow {
    #[tabled(rename = "#")]
    rank: String,
    name: String,
    value: String,
    bar: String,
}

#[derive(Tabled)]
struct MarginRow {
    winner: String,
    margin: String,
}

#[derive(Tabled)]
struct ScoreRow {
    batter: String,
    score: String,
}

#[derive(Tabled)]
struct FigureRow {
    bowler: String,
    figure: String,
}

/// Horizontal bar scaled against the largest value in the chart.
pub fn bar(value: u64, max: u64, width: usize) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let len = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(len.max(1))
}

pub fn display_report(report: &DashboardReport) {
    println!(
        "\n{}",
        "🏏 IPL Data Analysis Dashboard".bold().cyan()
    );
    println!("{}", "=".repeat(60).cyan());
    println!(
        "{} {} matches, {} selected teams ({} matches)\n",
        "📈 Table:".bold(),
        report.total_matches,
        report.selected_teams.len(),
        report.filtered_matches
    );

    section("🏆 Most Matches Won By A Team");
    display_bar_chart(&report.wins_by_team, "wins");

    section("🪙 Toss Decision Trends");
    display_bar_chart(&report.toss_decisions, "matches");

    section("📊 Toss Winner Impact");
    display_metric("Toss Winner Also Won Match", report.toss_win_percentage);

    section("⚔ Matches Won By");
    display_bar_chart(&report.win_margin_types, "matches");

    section("🌟 Top 10 Players With Most Player of the Match");
    display_bar_chart(&report.top_players_of_match, "awards");

    section("🔥 Top 2 Highest Scorers (Total Runs)");
    display_bar_chart(&report.top_scorers, "runs");

    section("🎯 Top 10 Bowlers by Total Wickets");
    display_bar_chart(&report.top_bowlers, "wickets");

    section("🏟 Matches Played Per Venue");
    display_bar_chart(&report.venues, "matches");

    section("🚀 Biggest Win By Runs");
    display_biggest_win(report.biggest_win_by_runs.as_ref());

    section("💥 Highest Individual Score");
    display_scores(&report.highest_individual_scores);

    section("🔥 Best Bowling Figure");
    display_figures(&report.best_bowling_figures);

    println!();
}

fn section(title: &str) {
    println!("\n{}", title.bold().yellow());
}

fn no_data() {
    println!("{}", "No data for the current selection".yellow());
}

fn as_u64<T>(value: T) -> u64
where
    u64: TryFrom<T>,
{
    u64::try_from(value).unwrap_or(u64::MAX)
}

pub fn display_bar_chart<T>(entries: &[Ranked<T>], unit: &str)
where
    T: Copy + fmt::Display,
    u64: TryFrom<T>,
{
    if entries.is_empty() {
        no_data();
        return;
    }

    let max = entries.iter().map(|e| as_u64(e.value)).max().unwrap_or(0);

    let rows: Vec<BarRow> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| BarRow {
            rank: format!("{}", idx + 1),
            name: entry.label.clone(),
            value: format!("{} {}", entry.value, unit),
            bar: bar(as_u64(entry.value), max, BAR_WIDTH).green().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn display_metric(label: &str, percentage: Option<f64>) {
    let value = match percentage {
        Some(p) => format!("{}%", p).bold().green().to_string(),
        None => "n/a".dimmed().to_string(),
    };
    println!("  {} {}", format!("{}:", label).bold(), value);
}

fn display_biggest_win(win: Option<&WinMargin>) {
    let Some(win) = win else {
        no_data();
        return;
    };

    let mut table = Table::new(vec![MarginRow {
        winner: win.match_winner.clone(),
        margin: format!("{} runs", win.margin),
    }]);
    table.with(Style::rounded());
    println!("{}", table);
}

fn display_scores(scores: &[ScoreLine]) {
    if scores.is_empty() {
        no_data();
        return;
    }

    let rows: Vec<ScoreRow> = scores
        .iter()
        .map(|s| ScoreRow {
            batter: s.top_scorer.clone(),
            score: s.highscore.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

fn display_figures(figures: &[BowlingLine]) {
    if figures.is_empty() {
        no_data();
        return;
    }

    let rows: Vec<FigureRow> = figures
        .iter()
        .map(|f| FigureRow {
            bowler: f.best_bowling.clone(),
            figure: f.best_bowling_figure.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
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
