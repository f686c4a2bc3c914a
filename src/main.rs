use gradebook::core::cli::CliPaths;
use gradebook::core::context::AppContext;
use gradebook::logging::LogTarget;
use gradebook::prompter::flows::main_menu::MainMenuFlow;
use gradebook::prompter::prompter::Prompter;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut ctx = match AppContext::new_with_paths(paths) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let logger = ctx.logger.clone();
    let prompter = Prompter::new();
    let flow = MainMenuFlow::new(&mut ctx);

    if let Err(err) = prompter.run(flow) {
        logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
