use crate::cli::{Command, DemoArgs, DescribeArgs};
use lakepath::{
    config::resolve_descriptor_config,
    core::naming::{CatalogIndex, DescriptorConfig, PathNamer},
    dataset::employees,
};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use thiserror::Error as ThisError;

///
/// CliError
///

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error(transparent)]
    Lakepath(#[from] lakepath::Error),

    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

///
/// Runner
///
/// Executes one parsed command against an output sink. Configuration is
/// only loaded by commands that need it.
///

pub struct Runner {
    config_path: Option<PathBuf>,
    debug: bool,
}

impl Runner {
    #[must_use]
    pub const fn new(config_path: Option<PathBuf>, debug: bool) -> Self {
        Self { config_path, debug }
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            eprintln!("[debug] {}", s.as_ref());
        }
    }

    pub fn run(&self, command: &Command, out: &mut impl Write) -> Result<(), CliError> {
        match command {
            Command::Describe(args) => self.describe(args, out),
            Command::Demo(args) => self.demo(args, out),
        }
    }

    fn load_config(&self) -> Result<DescriptorConfig, CliError> {
        match &self.config_path {
            Some(path) => self.debug_log(format!("loading config from {}", path.display())),
            None => self.debug_log("no config file, using defaults"),
        }

        let config = resolve_descriptor_config(self.config_path.as_deref())
            .map_err(lakepath::Error::from)?;
        self.debug_log(format!("descriptor config: {config:?}"));

        Ok(config)
    }

    /// Name every table first and only write once all of them succeeded,
    /// so a bad table or a catalog collision produces no partial output.
    fn describe(&self, args: &DescribeArgs, out: &mut impl Write) -> Result<(), CliError> {
        let config = self.load_config()?;
        let mut index = CatalogIndex::new();
        let mut namers = Vec::with_capacity(args.tables.len());

        for table in &args.tables {
            let namer = PathNamer::new(&config, args.database.as_str(), table.as_str())
                .map_err(lakepath::Error::from)?;

            if index.insert(&namer).map_err(lakepath::Error::from)? {
                self.debug_log(format!("{} -> {}", namer.request(), namer.catalog_id()));
                namers.push(namer);
            } else {
                self.debug_log(format!("skipping duplicate table {}", namer.table()));
            }
        }

        if args.json {
            serde_json::to_writer_pretty(&mut *out, &namers)?;
            writeln!(out)?;
        } else {
            for (i, namer) in namers.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_namer(out, namer)?;
            }
        }

        Ok(())
    }

    fn demo(&self, args: &DemoArgs, out: &mut impl Write) -> Result<(), CliError> {
        let dataset = employees().map_err(lakepath::Error::from)?;
        self.debug_log(format!(
            "demo dataset: {} rows, {} columns",
            dataset.len(),
            dataset.schema().len()
        ));

        if args.schema {
            write!(out, "{}", dataset.schema().tree_string())?;
            writeln!(out)?;
        }
        write!(out, "{}", dataset.show(args.limit, args.truncate))?;

        Ok(())
    }
}

// write_namer
fn write_namer(out: &mut impl Write, namer: &PathNamer) -> io::Result<()> {
    writeln!(out, "database:   {}", namer.database())?;
    writeln!(out, "table:      {}", namer.table())?;
    writeln!(out, "staging:    {}", namer.staging())?;
    writeln!(out, "bronze:     {}", namer.bronze())?;
    writeln!(out, "catalog_id: {}", namer.catalog_id())
}

///
/// TESTS
///
