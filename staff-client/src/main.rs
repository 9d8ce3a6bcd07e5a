use clap::{Parser, Subcommand};
use staff_client::{
    Console, ConsoleConfig, DigitField, Employee, PromotionForm, RosterEntry, ViewState,
    init_logger,
};

#[derive(Parser)]
#[command(name = "staff-console")]
#[command(about = "Browse departments, look up employees and submit promotions")]
struct Cli {
    /// Employee service base address (overrides STAFF_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Log level (overrides STAFF_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all departments, ordered by code
    Departments,
    /// Show one employee's record and salary history
    Lookup {
        /// Employee number (digits only)
        emp_no: DigitField,
    },
    /// Show one page of a department's employees
    Roster {
        /// Department code, e.g. d005
        dept_no: String,
        /// Page number; empty or 0 means the first page
        #[arg(long, default_value = "")]
        page: DigitField,
    },
    /// Change an employee's department, title and salary
    Promote {
        #[arg(long)]
        emp_no: DigitField,
        #[arg(long)]
        salary: DigitField,
        #[arg(long)]
        title: String,
        #[arg(long)]
        dept: String,
        /// Effective date (YYYY-MM-DD); the service uses today when omitted
        #[arg(long, default_value = "")]
        date: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let mut config = ConsoleConfig::from_env();
    if let Some(url) = cli.api_url {
        config = config.with_base_url(url);
    }
    if let Some(level) = cli.log_level {
        config = config.with_log_level(level);
    }
    init_logger(&config.log_level);

    let console = Console::connect(&config)?;

    if matches!(cli.command, Command::Departments) {
        for dept in console.load_departments().await? {
            println!("{:<6} {}", dept.dept_no, dept.dept_name);
        }
        return Ok(());
    }

    // the other workflows still work without a directory
    if let Err(e) = console.initialize().await {
        tracing::warn!("Department list unavailable: {}", e);
    }

    match cli.command {
        Command::Departments => {}
        Command::Lookup { emp_no } => {
            let view = console.lookup_employee(emp_no.as_str()).await;
            print_view(&view, print_employee);
        }
        Command::Roster { dept_no, page } => {
            let view = console.list_roster(&dept_no, page.as_str()).await;
            print_view(&view, |entries| print_roster(entries));
        }
        Command::Promote {
            emp_no,
            salary,
            title,
            dept,
            date,
        } => {
            let form = PromotionForm::new(emp_no.as_str(), salary.as_str(), title, dept)
                .with_date(date);
            let view = console.submit_promotion(&form).await;
            print_view(&view, |message| println!("{}", message));
        }
    }

    Ok(())
}

fn print_view<T>(view: &ViewState<T>, render: impl FnOnce(&T)) {
    match view {
        ViewState::Success(payload) => render(payload),
        ViewState::Empty(message) => println!("{}", message),
        ViewState::Error(message) => eprintln!("{}", message),
        ViewState::Idle => {}
    }
}

fn print_employee(employee: &Employee) {
    println!("Employee No   {}", employee.emp_no);
    println!("Name          {}", employee.full_name());
    println!("Birth Date    {}", employee.birth_date);
    println!("Gender        {}", employee.gender);
    println!("Hire Date     {}", employee.hire_date);
    if let Some(title) = employee.current_title() {
        println!("Title         {}", title.title);
    }
    if let Some(dept) = employee.current_department() {
        println!("Department    {}", dept.dept_no);
    }
    println!();
    println!("{:<12} {:<12} {:>10}", "From", "To", "Salary");
    for salary in &employee.salary_history {
        println!(
            "{:<12} {:<12} {:>10}",
            salary.from_date.to_string(),
            salary.to_date.to_string(),
            salary.salary
        );
    }
}

fn print_roster(entries: &[RosterEntry]) {
    println!("{:<8} {:<16} {:<16} {}", "Emp No", "First", "Last", "Hired");
    for entry in entries {
        println!(
            "{:<8} {:<16} {:<16} {}",
            entry.emp_no, entry.first_name, entry.last_name, entry.hire_date
        );
    }
}
