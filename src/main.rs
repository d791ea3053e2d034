use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wr_draft::config::Config;
use wr_draft::display::output::{
    display_champion_info, display_champions, display_error, display_info, display_recommendation_detail,
    display_recommendations, display_roles, display_success, display_team_stats, display_warning,
};
use wr_draft::{AppError, Dataset, DraftEngine, DraftState, Recommendation, Side, ROLES};

#[derive(Parser, Debug)]
#[command(name = "WR Draft")]
#[command(about = "Champion recommendations for team drafts", long_about = None)]
struct Args {
    /// Directory holding the reference data JSON files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Language for explanations (EN, FR)
    #[arg(short, long, global = true)]
    lang: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend champions for a role given the current draft
    Recommend {
        /// Role being filled (top, jungle, mid, adc, support)
        #[arg(short, long)]
        role: String,

        /// Ally picks, comma separated champion ids
        #[arg(short, long, value_delimiter = ',')]
        ally: Vec<String>,

        /// Enemy picks, comma separated champion ids
        #[arg(short, long, value_delimiter = ',')]
        enemy: Vec<String>,

        /// Banned champions, comma separated champion ids
        #[arg(short, long, value_delimiter = ',')]
        ban: Vec<String>,

        /// Number of recommendations to display
        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        /// Recommend for the enemy side instead of the allies
        #[arg(long)]
        enemy_side: bool,

        /// Only keep champions whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Print JSON instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Best picks against a single enemy champion
    Counters {
        /// Champion id to counter
        target: String,

        #[arg(short, long, default_value = "top")]
        role: String,

        #[arg(short = 'n', long)]
        top_n: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Composition stats for a team
    Stats {
        /// Comma separated champion ids
        #[arg(value_delimiter = ',')]
        team: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Champions viable for a role
    Pool {
        role: String,
    },

    /// List every role known to the dataset
    Roles,

    /// Show one champion
    Champion {
        id: String,
    },
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }
    if let Some(lang) = args.lang {
        config.lang = lang.trim().to_uppercase();
    }

    let dataset = Dataset::load(&config.data_dir);
    if dataset.champions.is_empty() {
        return Err(AppError::DataError(format!(
            "no champions loaded from {}",
            config.data_dir.display()
        )));
    }
    let engine = DraftEngine::new(dataset);

    match args.command {
        Command::Recommend {
            role,
            ally,
            enemy,
            ban,
            top_n,
            enemy_side,
            search,
            json,
        } => {
            check_role(&engine, &role)?;
            warn_unknown(&engine, ally.iter().chain(&enemy).chain(&ban));

            let draft = build_draft(&ally, &enemy, &ban)?;
            let side = if enemy_side { Side::Enemy } else { Side::Ally };
            let query = draft.query(side);
            let top_n = top_n.unwrap_or(config.top_n);

            let recommendations = match search {
                Some(needle) => {
                    let needle = needle.to_lowercase();
                    let mut all = engine.recommend(
                        &role,
                        &query.team,
                        &query.enemies,
                        &query.banned,
                        usize::MAX,
                        &config.lang,
                    );
                    all.retain(|r| r.champion.name.to_lowercase().contains(&needle));
                    all.truncate(top_n);
                    all
                }
                None => engine.recommend(
                    &role,
                    &query.team,
                    &query.enemies,
                    &query.banned,
                    top_n,
                    &config.lang,
                ),
            };

            if json {
                return print_json(&recommendations);
            }

            if !query.team.is_empty() {
                let analysis = engine.analyze_team(&query.team);
                display_team_stats(
                    "Team Composition",
                    &analysis,
                    &engine.team_stats(&query.team),
                    engine.team_strength(&query.team),
                );
            }
            show_recommendations(&recommendations, &role, &config.lang);
        }

        Command::Counters {
            target,
            role,
            top_n,
            json,
        } => {
            check_role(&engine, &role)?;
            let target_name = engine
                .champion(&target)
                .map(|c| c.name.clone())
                .ok_or_else(|| AppError::ChampionNotFound(target.clone()))?;

            let recommendations =
                engine.best_counters(&target, &role, top_n.unwrap_or(config.top_n), &config.lang);

            if json {
                return print_json(&recommendations);
            }

            display_info(&format!("Best {} picks against {}", role, target_name));
            show_recommendations(&recommendations, &role, &config.lang);
        }

        Command::Stats { team, json } => {
            warn_unknown(&engine, team.iter());
            let analysis = engine.analyze_team(&team);
            let stats = engine.team_stats(&team);
            let strength = engine.team_strength(&team);

            if json {
                return print_json(&serde_json::json!({
                    "analysis": analysis,
                    "stats": stats,
                    "strength": strength,
                }));
            }

            display_team_stats("Team Composition", &analysis, &stats, strength);
        }

        Command::Pool { role } => {
            check_role(&engine, &role)?;
            let pool = engine.index().viable_champions(&role);
            display_success(&format!("{} champions viable for {}", pool.len(), role));
            display_champions(&pool, &role);
        }

        Command::Roles => display_roles(&engine.roles()),

        Command::Champion { id } => {
            let champ = engine
                .champion(&id)
                .ok_or_else(|| AppError::ChampionNotFound(id.clone()))?;
            println!("\n{}\n", champ.name);
            display_champion_info(champ, &config.lang);
        }
    }

    Ok(())
}

fn check_role(engine: &DraftEngine, role: &str) -> Result<(), AppError> {
    if ROLES.contains(&role) || engine.roles().iter().any(|r| r == role) {
        Ok(())
    } else {
        Err(AppError::UnknownRole(role.to_string()))
    }
}

fn warn_unknown<'a>(engine: &DraftEngine, ids: impl Iterator<Item = &'a String>) {
    for id in ids {
        if engine.champion(id).is_none() {
            display_warning(&format!("Unknown champion id '{}' will be ignored", id));
        }
    }
}

fn build_draft(ally: &[String], enemy: &[String], ban: &[String]) -> Result<DraftState, AppError> {
    let mut draft = DraftState::new();
    for (slot, id) in ally.iter().enumerate() {
        draft.pick(Side::Ally, slot, id)?;
    }
    for (slot, id) in enemy.iter().enumerate() {
        draft.pick(Side::Enemy, slot, id)?;
    }
    for id in ban {
        draft.ban(id)?;
    }
    Ok(draft)
}

fn show_recommendations(recommendations: &[Recommendation], role: &str, lang: &str) {
    display_recommendations(recommendations, role);
    if let Some(top) = recommendations.first() {
        display_recommendation_detail(top, lang);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let out = serde_json::to_string_pretty(value).map_err(|e| AppError::JsonError(e.to_string()))?;
    println!("{}", out);
    Ok(())
}
