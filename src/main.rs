mod planner;

use chrono::Local;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use planner::list::{TaskList, ViewFilter};
use planner::task::TaskBuilder;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut todo_list = TaskList::new();

    // ==============================
    // 🎛 INTERACTIVE MENU LOOP
    // ==============================
    loop {
        let choice = display_menu()?;

        match choice {
            0 => add_task(&mut todo_list)?,
            1 => mark_task(&mut todo_list, true)?,
            2 => mark_task(&mut todo_list, false)?,
            3 => delete_task(&mut todo_list)?,
            4 => view_tasks(&todo_list)?,
            5 => {
                todo_list.undo();
                println!("↩️  Undo completed.");
            }
            6 => {
                println!("👋 Exiting To-Do List Manager.");
                break;
            }
            _ => println!("❌ Invalid choice."),
        }
    }

    Ok(())
}

fn display_menu() -> Result<usize, Box<dyn Error>> {
    println!("\n{}", "=".repeat(80));
    println!("📋 To-Do List Manager");
    println!("{}", "=".repeat(80));

    let items = vec![
        "📝 Add Task",
        "✅ Mark Task as Completed",
        "🔄 Mark Task as Pending",
        "🗑  Delete Task",
        "👀 View Tasks",
        "↩️  Undo",
        "❌ Exit",
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Choose an option")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(selection)
}

fn add_task(todo_list: &mut TaskList) -> Result<(), Box<dyn Error>> {
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Task description")
        .interact_text()?;

    if description.trim().is_empty() {
        println!("❌ Description cannot be empty.");
        return Ok(());
    }

    let due_date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Due date (optional, press Enter to skip)")
        .allow_empty(true)
        .interact_text()?;

    let tags_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Tags (comma-separated, optional)")
        .allow_empty(true)
        .interact_text()?;

    let mut builder = TaskBuilder::new(description.trim());

    if !due_date.trim().is_empty() {
        builder = builder.set_due_date(due_date.trim());
    }

    for tag in tags_input.split(',') {
        let tag = tag.trim();
        if !tag.is_empty() {
            builder = builder.add_tag(tag);
        }
    }

    todo_list.add_task(builder.build());
    println!("✅ Task added.");
    Ok(())
}

fn mark_task(todo_list: &mut TaskList, completed: bool) -> Result<(), Box<dyn Error>> {
    print_tasks(todo_list.view(ViewFilter::All));

    let verb = if completed { "completed" } else { "pending" };
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Task description to mark as {}", verb))
        .interact_text()?;

    // First match wins when descriptions collide; the core only sees ids.
    match find_id(todo_list, &description) {
        Some(id) => {
            if completed {
                todo_list.mark_completed(&id)?;
            } else {
                todo_list.mark_pending(&id)?;
            }
            println!("✅ Task \"{}\" marked as {}.", description.trim(), verb);
        }
        None => println!("❌ Task \"{}\" not found.", description.trim()),
    }

    Ok(())
}

fn delete_task(todo_list: &mut TaskList) -> Result<(), Box<dyn Error>> {
    print_tasks(todo_list.view(ViewFilter::All));

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Task description to delete")
        .interact_text()?;

    match find_id(todo_list, &description) {
        Some(id) => {
            todo_list.delete_task(&id)?;
            println!("🗑  Task \"{}\" deleted.", description.trim());
        }
        None => println!("❌ Task \"{}\" not found.", description.trim()),
    }

    Ok(())
}

fn view_tasks(todo_list: &TaskList) -> Result<(), Box<dyn Error>> {
    let filter_input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Filter (all/completed/pending)")
        .allow_empty(true)
        .interact_text()?;

    print_tasks(todo_list.view(ViewFilter::parse(&filter_input)));
    Ok(())
}

fn find_id(todo_list: &TaskList, description: &str) -> Option<String> {
    todo_list
        .tasks()
        .iter()
        .find(|t| t.description == description.trim())
        .map(|t| t.id.clone())
}

fn print_tasks(tasks: Vec<&planner::task::Task>) {
    if tasks.is_empty() {
        println!("(no tasks)");
        return;
    }

    for task in tasks {
        println!("{}", task.render());
        let created = task.created_at.with_timezone(&Local);
        println!(
            "    {}",
            style(format!("📅 added {}", created.format("%Y-%m-%d %H:%M"))).dim()
        );
    }
}
