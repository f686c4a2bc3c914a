use std::io::{self, Write};

use strum::IntoEnumIterator;

use crate::core::context::AppContext;
use crate::core::models::{Grade, StudentRecord, validate_name};
use crate::core::persist::{load_roster, save_roster};
use crate::core::roster::Roster;
use crate::core::types::{MenuChoice, SaveLoadChoice, SortField};
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl, MenuState};
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

pub struct MainMenuFlow<'a> {
    ctx: &'a mut AppContext,
    dm: DisplayManager,
    state: MenuState,
    logger: Logger,
}

impl<'a> MainMenuFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            dm: DisplayManager::new(),
            state: MenuState::Main,
            logger,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> MenuState {
        self.state.clone()
    }
}

impl<'a> Flow for MainMenuFlow<'a> {
    fn render(&mut self) -> Result<()> {
        match self.state {
            MenuState::Main => {
                self.print_startup();
                self.print_main_menu();
            }
            MenuState::SaveLoad => self.print_save_load_menu(),
            MenuState::Sort => self.print_sort_menu(),
            MenuState::AddId => {
                println!("\n--ADD STUDENT--");
                Self::print_prompt("Enter Student ID ->");
            }
            MenuState::AddName { .. } => Self::print_prompt("Enter Student's Name ->"),
            MenuState::AddGrade { .. } => {
                Self::print_prompt("Enter Student's Grade (0-100) ->");
            }
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        match self.state.clone() {
            MenuState::Main => self.handle_main_input(input),
            MenuState::SaveLoad => self.handle_save_load_input(input),
            MenuState::Sort => self.handle_sort_input(input),
            MenuState::AddId => self.handle_add_id_input(input),
            MenuState::AddName { id } => self.handle_add_name_input(id, input),
            MenuState::AddGrade { id, name } => self.handle_add_grade_input(id, &name, input),
        }
    }
}

// ----------------------------- Rendering --------------------------------------

impl<'a> MainMenuFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        UiChrome::new().print_banner();
        println!();
        println!("Data file: {}", self.ctx.data_path.display());
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        self.ctx.startup_displayed = true;
    }

    fn print_main_menu(&self) {
        println!("\n\t\t --- STUDENT MENU --- \n");
        for choice in MenuChoice::iter() {
            println!("({}) {}", choice.ordinal(), choice.label());
        }
        println!("\n{}\n", "-".repeat(42));
        Self::print_prompt("Select a menu option ->");
    }

    fn print_save_load_menu(&self) {
        println!();
        for choice in SaveLoadChoice::iter() {
            println!("({}) {}", choice.ordinal(), choice.label());
        }
        Self::print_prompt("\nSelect ->");
    }

    fn print_sort_menu(&self) {
        println!("\n--SORT BY--\n");
        for field in SortField::iter() {
            println!("({}) {}", field.ordinal(), field);
        }
        Self::print_prompt("\nSelect ->");
    }

    fn print_prompt(prompt: &str) {
        print!("{prompt}");
        let _ = io::stdout().flush();
    }
}

// ----------------------------- Dispatch ---------------------------------------

impl<'a> MainMenuFlow<'a> {
    fn handle_main_input(&mut self, input: &str) -> Result<FlowCtrl> {
        let choice = match MenuChoice::try_from_input(input) {
            Ok(choice) => choice,
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleOnly);
                return Ok(FlowCtrl::Continue);
            }
        };

        self.logger.info(
            format!("Menu option selected: ({}) {}", choice.ordinal(), choice.label()),
            LogTarget::FileOnly,
        );

        match choice {
            MenuChoice::SaveLoad => self.state = MenuState::SaveLoad,
            MenuChoice::AddStudent => self.state = MenuState::AddId,
            MenuChoice::Analyse => self.dm.display_summary(&self.ctx.roster),
            MenuChoice::Sort => self.state = MenuState::Sort,
            MenuChoice::PlotGrades => self.dm.display_bar_chart(&self.ctx.roster),
            MenuChoice::PlotDistribution => self.dm.display_distribution(&self.ctx.roster),
            MenuChoice::PlotHistogram => self.dm.display_histogram(&self.ctx.roster),
            MenuChoice::Exit => {
                println!("\nGoodbye :)");
                return Ok(FlowCtrl::Finish);
            }
        }
        Ok(FlowCtrl::Continue)
    }

    fn handle_save_load_input(&mut self, input: &str) -> Result<FlowCtrl> {
        let choice = match SaveLoadChoice::try_from_input(input) {
            Ok(choice) => choice,
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleOnly);
                return Ok(FlowCtrl::Continue);
            }
        };

        self.state = MenuState::Main;
        match choice {
            SaveLoadChoice::Save => self.save_data()?,
            SaveLoadChoice::Load => self.load_data()?,
        }
        Ok(FlowCtrl::Continue)
    }

    fn handle_sort_input(&mut self, input: &str) -> Result<FlowCtrl> {
        let field = match SortField::try_from_input(input) {
            Ok(field) => field,
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleOnly);
                return Ok(FlowCtrl::Continue);
            }
        };

        self.ctx.roster = self.ctx.roster.sorted(field);
        self.logger.info(
            format!("Sorted students by {field}."),
            LogTarget::ConsoleAndFile,
        );
        self.dm.display_roster(&self.ctx.roster);
        self.state = MenuState::Main;
        Ok(FlowCtrl::Continue)
    }

    fn handle_add_id_input(&mut self, input: &str) -> Result<FlowCtrl> {
        // Any failure aborts the add and falls back to the main menu.
        self.state = MenuState::Main;

        let id = match input.trim().parse::<i32>() {
            Ok(id) => id,
            Err(_) => {
                self.logger
                    .error("Error - ID should be an integer.", LogTarget::ConsoleOnly);
                return Ok(FlowCtrl::Continue);
            }
        };
        if self.ctx.roster.contains_id(id) {
            self.logger.error(
                Error::DuplicateId { id }.to_string(),
                LogTarget::ConsoleOnly,
            );
            return Ok(FlowCtrl::Continue);
        }

        self.state = MenuState::AddName { id };
        Ok(FlowCtrl::Continue)
    }

    fn handle_add_name_input(&mut self, id: i32, input: &str) -> Result<FlowCtrl> {
        self.state = MenuState::Main;

        let name = match validate_name(input) {
            Ok(name) => name.to_string(),
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleOnly);
                return Ok(FlowCtrl::Continue);
            }
        };

        self.state = MenuState::AddGrade { id, name };
        Ok(FlowCtrl::Continue)
    }

    fn handle_add_grade_input(&mut self, id: i32, name: &str, input: &str) -> Result<FlowCtrl> {
        self.state = MenuState::Main;

        let added = Grade::try_from_str(input)
            .and_then(|grade| StudentRecord::new(id, name, grade))
            .and_then(|record| self.ctx.roster.add(record).map(|r| r.to_string()));

        match added {
            Ok(stored) => {
                self.logger
                    .info("Student has been added.", LogTarget::ConsoleOnly);
                self.logger.info(format!("Added {stored}"), LogTarget::FileOnly);
            }
            Err(err) => {
                self.logger.error(err.to_string(), LogTarget::ConsoleOnly);
            }
        }
        Ok(FlowCtrl::Continue)
    }
}

// ----------------------------- Save / Load ------------------------------------

impl<'a> MainMenuFlow<'a> {
    fn save_data(&mut self) -> Result<()> {
        let path = save_roster(&self.ctx.roster, &self.ctx.data_path)?;
        self.logger.info(
            format!("{} updated", path.display()),
            LogTarget::ConsoleAndFile,
        );
        Ok(())
    }

    fn load_data(&mut self) -> Result<()> {
        match load_roster(&self.ctx.data_path)? {
            Some(roster) => {
                self.logger.info(
                    format!(
                        "Loaded {} student(s) from {}.",
                        roster.len(),
                        self.ctx.data_path.display()
                    ),
                    LogTarget::ConsoleAndFile,
                );
                self.ctx.roster = roster;
                self.dm.display_roster(&self.ctx.roster);
            }
            None => {
                self.logger.warn(
                    "File not found. Starting with an empty dataset.",
                    LogTarget::ConsoleAndFile,
                );
                self.ctx.roster = Roster::new();
            }
        }
        Ok(())
    }
}
