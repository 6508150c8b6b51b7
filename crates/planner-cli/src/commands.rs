//! Command implementations.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use tracing::{info, info_span, warn};

use planner_core::guests::{self, guest_key};
use planner_core::quests::{abandon, complete, sort_complete_last};
use planner_core::{
    DirectoryFilter, EventFilter, MenuSelection, PlanFilter, ScheduleGrid, StatusFilter,
};
use planner_model::{Event, MenuData, Reminder};
use planner_report as report;
use planner_store::{CheckedRepository, GuestRepository, QuestRepository};

use crate::cli::{
    CheckArgs, EventArgs, EventsArgs, ExportFormatArg, FnbArgs, GuestsArgs, ImportArgs,
    MenuArgs, QuestIdArgs, QuestsArgs, ScheduleArgs, StatusArg,
};

fn store_dir(arg: &Option<PathBuf>) -> PathBuf {
    arg.clone().unwrap_or_else(|| PathBuf::from("planner-data"))
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("read stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
    }
}

fn load_events(path: &Path) -> Result<Vec<Event>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse event catalog {}", path.display()))
}

pub fn run_import(args: &ImportArgs) -> Result<()> {
    let span = info_span!("import", source = %args.input.display());
    let _guard = span.enter();

    let text = read_input(&args.input)?;
    let records = planner_import::import(&text)?;
    info!(count = records.len(), "import complete");

    match args.format {
        ExportFormatArg::Json => println!("{}", report::guests_to_json(&records)?),
        ExportFormatArg::Csv => print!("{}", report::guests_to_csv(&records)?),
    }

    if args.save {
        let repo = GuestRepository::new(store_dir(&args.data_dir))?;
        let path = repo.save(&records)?;
        info!(count = records.len(), path = %path.display(), "guest list replaced");
    }
    Ok(())
}

pub fn run_guests(args: &GuestsArgs) -> Result<()> {
    let dir = store_dir(&args.data_dir);
    let records = GuestRepository::new(&dir)?.load()?;
    let checked = CheckedRepository::new(&dir)?.load()?;

    if let Some(key) = &args.detail {
        let guest = records
            .iter()
            .find(|g| guest_key(g) == *key)
            .ok_or_else(|| anyhow!("guest {key} not found"))?;
        println!("{}", report::guest_detail(guest, &checked));
        return Ok(());
    }

    let filter = DirectoryFilter {
        query: args.query.clone().unwrap_or_default(),
        plan: match &args.plan {
            Some(code) if !code.eq_ignore_ascii_case("all") => {
                PlanFilter::Code(code.to_uppercase())
            }
            _ => PlanFilter::All,
        },
        status: match args.status {
            StatusArg::All => StatusFilter::All,
            StatusArg::Checked => StatusFilter::Checked,
            StatusArg::NotChecked => StatusFilter::NotChecked,
        },
    };

    let mut view = guests::filter(&records, &filter, &checked);
    guests::sort_by_room(&mut view);
    let counts = guests::counts(&view, &checked);

    if view.is_empty() {
        println!("No guests match the current filters.");
    } else {
        println!("{}", report::directory_table(&view, &checked));
    }
    println!("{}", report::pills_line(&counts));
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let dir = store_dir(&args.data_dir);
    let records = GuestRepository::new(&dir)?.load()?;
    if !records.iter().any(|g| guest_key(g) == args.key) {
        warn!(key = %args.key, "key does not match any stored guest");
    }

    let repo = CheckedRepository::new(&dir)?;
    let mut state = repo.load()?;
    state.set_checked(&args.key, !args.off);
    repo.save(&state)?;

    if args.off {
        println!("Unchecked {}", args.key);
    } else {
        println!("Checked {}", args.key);
    }
    Ok(())
}

pub fn run_events(args: &EventsArgs) -> Result<()> {
    let events = load_events(&args.file)?;
    let filter = EventFilter {
        search: args.search.clone().unwrap_or_default(),
        room: args.room.clone(),
        day: args.day.clone(),
    };
    let view = planner_core::events::filter_events(&events, &filter);

    let now = chrono::Local::now().naive_local();
    let past: Vec<bool> = view
        .iter()
        .map(|event| planner_core::events::is_past(event, now))
        .collect();

    if view.is_empty() {
        println!("No events match the current filters.");
    } else {
        println!("{}", report::events_table(&view, &past));
    }
    println!("{}", report::events_summary(view.len(), events.len()));
    Ok(())
}

pub fn run_event(args: &EventArgs) -> Result<()> {
    let events = load_events(&args.file)?;
    let event = planner_core::events::find_event(&events, args.id)
        .ok_or_else(|| anyhow!("event {} not found", args.id))?;
    println!("{}", report::event_card(event));
    Ok(())
}

pub fn run_schedule(args: &ScheduleArgs) -> Result<()> {
    let events = load_events(&args.file)?;
    let grid = ScheduleGrid::build(&events);
    println!("{}", report::schedule_table(&grid));
    println!("{}", report::schedule_summary(&grid));
    Ok(())
}

pub fn run_fnb(args: &FnbArgs) -> Result<()> {
    let events = load_events(&args.file)?;
    let day = match &args.day {
        Some(day) => day.clone(),
        None => match planner_core::fnb::event_days(&events).into_iter().next() {
            Some(day) => day,
            None => {
                println!("No events loaded.");
                return Ok(());
            }
        },
    };

    let timeline = planner_core::fnb::build_timeline(&events, &day);
    if !timeline.is_empty() {
        println!("{}", report::timeline_text(&timeline));
    }
    println!("{}", report::timeline_summary(&day, timeline.len()));
    Ok(())
}

pub fn run_quests(args: &QuestsArgs) -> Result<()> {
    let repo = QuestRepository::new(store_dir(&args.data_dir))?;
    let mut reminders = repo.load()?;

    if reminders.is_empty()
        && let Some(seed) = &args.seed
    {
        let contents =
            fs::read_to_string(seed).with_context(|| format!("read {}", seed.display()))?;
        let mut seeded: Vec<Reminder> = serde_json::from_str(&contents)
            .with_context(|| format!("parse reminders {}", seed.display()))?;
        sort_complete_last(&mut seeded);
        repo.save(&seeded)?;
        info!(count = seeded.len(), "quest log seeded");
        reminders = seeded;
    }

    if let Some(id) = &args.detail {
        let reminder = reminders
            .iter()
            .find(|r| r.id == *id)
            .ok_or_else(|| anyhow!("quest {id} not found"))?;
        println!("{}", report::quest_detail(reminder));
        return Ok(());
    }

    if reminders.is_empty() {
        println!("Quest log is empty.");
    } else {
        println!("{}", report::quest_list(&reminders));
    }
    Ok(())
}

pub fn run_quest_complete(args: &QuestIdArgs) -> Result<()> {
    let repo = QuestRepository::new(store_dir(&args.data_dir))?;
    let mut reminders = repo.load()?;
    if !complete(&mut reminders, &args.id) {
        bail!("quest {} not found", args.id);
    }
    repo.save(&reminders)?;
    println!("Quest {} marked complete.", args.id);
    Ok(())
}

pub fn run_quest_abandon(args: &QuestIdArgs) -> Result<()> {
    let repo = QuestRepository::new(store_dir(&args.data_dir))?;
    let mut reminders = repo.load()?;
    if !abandon(&mut reminders, &args.id) {
        bail!("quest {} not found", args.id);
    }
    repo.save(&reminders)?;
    println!("Quest {} abandoned.", args.id);
    Ok(())
}

pub fn run_menu(args: &MenuArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let data: MenuData = serde_json::from_str(&contents)
        .with_context(|| format!("parse menu catalog {}", args.file.display()))?;

    let selection = MenuSelection {
        sandwiches: args.sandwiches.clone(),
        soups: args.soups.clone(),
        desserts: args.desserts.clone(),
    };
    let sections = planner_core::menu::compose(&data, &selection);
    println!("{}", report::printable_menu(&args.title, &args.meta, &sections));
    Ok(())
}
