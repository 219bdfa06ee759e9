use super::args::{Cli, Commands, FavoriteCommand, FilmCommand, SelectCommand};
use super::handlers;
use anyhow::Result;
use marquee_runtime::{Facets, Workspace};

pub fn run(cli: Cli) -> Result<()> {
    let workspace = Workspace::resolve(Some(&cli.data_dir))?;

    let Some(command) = cli.command else {
        show_guidance(&workspace);
        return Ok(());
    };

    match command {
        Commands::Init {
            catalog,
            share_header,
        } => handlers::init::handle(&workspace, &catalog, share_header, &cli.format),

        Commands::Film { command } => {
            let planner = workspace.open_planner()?;

            match command {
                FilmCommand::List {
                    query,
                    programme,
                    favorites_only,
                } => handlers::film::handle_list(
                    &planner,
                    query.as_deref(),
                    programme.as_deref(),
                    favorites_only,
                    &cli.format,
                ),
                FilmCommand::Show { film_id } => {
                    handlers::film::handle_show(&planner, &film_id, &cli.format)
                }
            }
        }

        Commands::Timetable {
            favorites_only,
            show_industry,
            selected_only,
            day,
        } => {
            let planner = workspace.open_planner()?;
            let facets = Facets {
                favorites_only,
                hide_industry: !show_industry,
                selected_only,
            };

            handlers::timetable::handle(&planner, facets, day, &cli.format)
        }

        Commands::Favorite { command } => {
            let mut planner = workspace.open_planner()?;

            match command {
                FavoriteCommand::List => handlers::favorite::handle_list(&planner, &cli.format),
                FavoriteCommand::Toggle { film_id } => {
                    handlers::favorite::handle_toggle(&mut planner, &film_id, &cli.format)
                }
                FavoriteCommand::Move {
                    source_film_id,
                    dest_film_id,
                } => handlers::favorite::handle_move(
                    &mut planner,
                    &source_film_id,
                    &dest_film_id,
                    &cli.format,
                ),
                FavoriteCommand::Export { format, output } => {
                    let share_header = workspace.load_config()?.share_header;
                    handlers::favorite::handle_export(
                        &planner,
                        format,
                        output.as_deref(),
                        share_header.as_deref(),
                    )
                }
            }
        }

        Commands::Select { command } => {
            let mut planner = workspace.open_planner()?;

            match command {
                SelectCommand::List => handlers::select::handle_list(&planner, &cli.format),
                SelectCommand::Toggle { screening_id } => {
                    handlers::select::handle_toggle(&mut planner, &screening_id, &cli.format)
                }
            }
        }
    }
}

fn show_guidance(workspace: &Workspace) {
    let initialized = workspace.config_path().exists();

    println!("marquee - Festival programme planner\n");

    if !initialized {
        println!("Get started:");
        println!("  marquee init --catalog <programme.json>\n");
        println!("The init command will:");
        println!("  1. Load and validate the festival programme");
        println!("  2. Set up the local database for your plan");
        println!("  3. Show a summary of the festival\n");
    } else {
        println!("Quick commands:");
        println!("  marquee timetable                 # The daily screening grid");
        println!("  marquee film list --query <text>  # Search the programme");
        println!("  marquee favorite toggle <ID>      # Shortlist a film");
        println!("  marquee select toggle <ID>        # Pick a screening\n");
    }

    println!("For more commands:");
    println!("  marquee --help");
}
