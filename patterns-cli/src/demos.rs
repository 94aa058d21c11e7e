//! Wiring for the two demo programs

use crate::error::CliError;
use library_catalog::{Library, LibraryManager, Session};
use patterns_log::Logger;
use std::io::{BufRead, Write};
use std::rc::Rc;
use vehicle_factory::{FactoryRegistryBuilder, run_demo};

/// Register every regional factory plugin and run the fixed vehicle sequence
pub fn run_vehicles(log: &dyn Logger) -> Result<(), CliError> {
    let registry = FactoryRegistryBuilder::new()
        .register_all_plugins()?
        .build();
    log.debug(&format!(
        "Registered factories: {}",
        registry.regions().collect::<Vec<_>>().join(", ")
    ));

    run_demo(&registry, log)?;
    Ok(())
}

/// Run the catalog loop over `input`, writing prompts to `output`
pub fn run_library<R, W>(input: R, output: W, log: Rc<dyn Logger>) -> Result<(), CliError>
where
    R: BufRead,
    W: Write,
{
    let manager = LibraryManager::new(Library::new(log.clone()), log.clone());
    Session::new(input, output, manager, log).run()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patterns_log::{Level, MemoryLogger};
    use std::fs::File;
    use std::io::BufReader;
    use tempfile::NamedTempFile;

    fn info_lines(log: &MemoryLogger) -> Vec<String> {
        log.records()
            .into_iter()
            .filter(|(level, _)| *level == Level::Info)
            .map(|(_, m)| m)
            .collect()
    }

    #[test]
    fn test_vehicle_demo_lines() {
        let log = MemoryLogger::new();
        run_vehicles(&log).unwrap();

        assert_eq!(
            info_lines(&log),
            vec![
                "Ford Mustang (US Spec): Двигун запущено",
                "Harley-Davidson Sportster (US Spec): Мотор заведено",
                "BMW 3 Series (EU Spec): Двигун запущено",
                "Ducati Monster (EU Spec): Мотор заведено",
            ]
        );
    }

    #[test]
    fn test_library_from_script_file() {
        let mut script = NamedTempFile::new().unwrap();
        write!(script, "add\nDune\nHerbert\n1965\nadd\nDune\nX\n1999\nshow\nexit\n").unwrap();

        let log = Rc::new(MemoryLogger::new());
        let input = BufReader::new(File::open(script.path()).unwrap());
        let mut prompts = Vec::new();
        run_library(input, &mut prompts, log.clone()).unwrap();

        assert_eq!(
            info_lines(&log),
            vec![
                "Book 'Dune' added",
                "Book 'Dune' already exists",
                "Books in library:",
                "Title: Dune, Author: Herbert, Year: 1965",
            ]
        );
        assert!(String::from_utf8(prompts).unwrap().starts_with(library_catalog::COMMAND_PROMPT));
    }

    #[test]
    fn test_library_truncated_script_fails() {
        let log = Rc::new(MemoryLogger::new());
        let result = run_library("remove\n".as_bytes(), std::io::sink(), log);
        assert!(matches!(result, Err(CliError::Catalog(_))));
    }
}
