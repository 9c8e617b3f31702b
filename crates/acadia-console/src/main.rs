use acadia_console::{Console, ConsoleConfig, Screen};
use acadia_manager::{EntityManager, NoticeLevel};
use acadia_model::{EntityKind, Record, Resource};
use clap::{Arg, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Command::new("acadia")
        .version("0.1.0")
        .about("Academic records console client")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Backend base URL (defaults to ACADIA_API_URL)"),
        )
        .subcommand_required(true)
        .subcommand(Command::new("dashboard").about("Show summary statistics"))
        .subcommand(
            Command::new("list")
                .about("List records of one entity")
                .arg(Arg::new("entity").required(true).help("Entity name, e.g. courses"))
                .arg(
                    Arg::new("search")
                        .long("search")
                        .help("Case-insensitive search over the entity's search fields"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show one record as JSON")
                .arg(Arg::new("entity").required(true))
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete one record")
                .arg(Arg::new("entity").required(true))
                .arg(Arg::new("id").required(true)),
        );

    let matches = cli.get_matches();

    let config = match matches.get_one::<String>("base-url") {
        Some(raw) => ConsoleConfig::new(raw.parse()?)?,
        None => ConsoleConfig::from_env()?,
    };
    let mut console = Console::new(config)?;

    match matches.subcommand() {
        Some(("dashboard", _)) => {
            let summary = console.dashboard().await;
            println!("Acadia dashboard");
            for (kind, total) in &summary.totals {
                println!("  {:<20} {total}", kind.title());
            }
            println!("  {:<20} {}", "Active courses", summary.active_courses);
            for (kind, error) in &summary.load_failures {
                eprintln!("  failed to load {}: {error}", kind.collection());
            }
        }
        Some(("list", args)) => {
            let kind: EntityKind = args.get_one::<String>("entity").unwrap().parse()?;
            let search = args.get_one::<String>("search").cloned();
            console.navigate(Screen::for_kind(kind));
            match kind {
                EntityKind::School => list(&mut console.schools, search).await,
                EntityKind::Department => list(&mut console.departments, search).await,
                EntityKind::Program => list(&mut console.programs, search).await,
                EntityKind::Course => list(&mut console.courses, search).await,
                EntityKind::Admin => list(&mut console.admins, search).await,
                EntityKind::Lecturer => list(&mut console.lecturers, search).await,
                EntityKind::Student => list(&mut console.students, search).await,
                EntityKind::CourseAssignment => list(&mut console.assignments, search).await,
            }?;
        }
        Some(("show", args)) => {
            let kind: EntityKind = args.get_one::<String>("entity").unwrap().parse()?;
            let id = args.get_one::<String>("id").unwrap();
            match kind {
                EntityKind::School => show(&console.schools, id).await,
                EntityKind::Department => show(&console.departments, id).await,
                EntityKind::Program => show(&console.programs, id).await,
                EntityKind::Course => show(&console.courses, id).await,
                EntityKind::Admin => show(&console.admins, id).await,
                EntityKind::Lecturer => show(&console.lecturers, id).await,
                EntityKind::Student => show(&console.students, id).await,
                EntityKind::CourseAssignment => show(&console.assignments, id).await,
            }?;
        }
        Some(("delete", args)) => {
            let kind: EntityKind = args.get_one::<String>("entity").unwrap().parse()?;
            let id = args.get_one::<String>("id").unwrap();
            match kind {
                EntityKind::School => delete(&mut console.schools, id).await,
                EntityKind::Department => delete(&mut console.departments, id).await,
                EntityKind::Program => delete(&mut console.programs, id).await,
                EntityKind::Course => delete(&mut console.courses, id).await,
                EntityKind::Admin => delete(&mut console.admins, id).await,
                EntityKind::Lecturer => delete(&mut console.lecturers, id).await,
                EntityKind::Student => delete(&mut console.students, id).await,
                EntityKind::CourseAssignment => delete(&mut console.assignments, id).await,
            }?;
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}

async fn list<E: Resource>(
    manager: &mut EntityManager<E>,
    search: Option<String>,
) -> anyhow::Result<()> {
    if let Some(needle) = search {
        manager.set_search(needle);
    }
    let view = manager.visible_records().await;
    if let Some(error) = &view.error {
        anyhow::bail!("{error}");
    }
    for record in &view.rows {
        println!("{:<28} {}", record.id(), record.label());
    }
    println!("{} record(s)", view.rows.len());
    Ok(())
}

async fn show<E: Resource>(manager: &EntityManager<E>, id: &str) -> anyhow::Result<()> {
    let record = manager.detail_record(id).await?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

async fn delete<E: Resource>(manager: &mut EntityManager<E>, id: &str) -> anyhow::Result<()> {
    let result = manager.request_delete(id).await;
    for notice in manager.drain_notices() {
        match notice.level {
            NoticeLevel::Success => println!("{}", notice.message),
            NoticeLevel::Error => eprintln!("{}", notice.message),
        }
    }
    result.map_err(Into::into)
}
