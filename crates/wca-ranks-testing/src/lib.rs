use {
    csv::WriterBuilder,
    std::{
        fs,
        path::{Path, PathBuf},
    },
    tempfile::TempDir,
    wca_ranks_tables::{
        CompetitionRow, CountryRow, EventRow, ResultRow, TableSource, COMPETITIONS_TABLE,
        COUNTRIES_TABLE, DEFAULT_FILE_PREFIX, EVENTS_TABLE, RESULTS_TABLE,
    },
};

/// Standard continent ids, as spelled in the export
pub const NORTH_AMERICA: &str = "_North America";
pub const EUROPE: &str = "_Europe";
pub const ASIA: &str = "_Asia";

/// A synthetic WCA export written into a temporary directory.
///
/// Tables are written with the same extra columns the real export carries, so
/// tests also exercise column selection by name.
pub struct ExportFixture {
    dir: TempDir,
    competitions: Vec<CompetitionRow>,
    countries: Vec<CountryRow>,
    events: Vec<EventRow>,
    results: Vec<ResultRow>,
}

impl Default for ExportFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create fixture directory"),
            competitions: Vec::new(),
            countries: Vec::new(),
            events: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Fixture with countries on three continents and the common events registered
    pub fn with_world() -> Self {
        let mut fixture = Self::new();
        fixture
            .country("USA", NORTH_AMERICA)
            .country("Canada", NORTH_AMERICA)
            .country("France", EUROPE)
            .country("Germany", EUROPE)
            .country("Japan", ASIA)
            .event("333")
            .event("222")
            .event("444");
        fixture
    }

    pub fn competition(&mut self, id: &str, year: i32) -> &mut Self {
        self.competitions.push(CompetitionRow {
            id: id.to_string(),
            year,
        });
        self
    }

    pub fn country(&mut self, id: &str, continent_id: &str) -> &mut Self {
        self.countries.push(CountryRow {
            id: id.to_string(),
            continent_id: continent_id.to_string(),
        });
        self
    }

    pub fn event(&mut self, id: &str) -> &mut Self {
        self.events.push(EventRow { id: id.to_string() });
        self
    }

    pub fn result(
        &mut self,
        competition_id: &str,
        person_id: &str,
        person_country_id: &str,
        event_id: &str,
        average: i64,
        best: i64,
    ) -> &mut Self {
        self.results.push(ResultRow {
            competition_id: competition_id.to_string(),
            person_id: person_id.to_string(),
            person_country_id: person_country_id.to_string(),
            event_id: event_id.to_string(),
            average,
            best,
        });
        self
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    /// Write all four tables and return a source pointing at them
    pub fn write(&self) -> TableSource {
        let data_dir = self.data_dir();
        fs::create_dir_all(&data_dir).expect("Failed to create data directory");
        let source = TableSource::new(&data_dir, DEFAULT_FILE_PREFIX);

        write_tsv(
            &source.path(COMPETITIONS_TABLE),
            &["id", "name", "year", "month", "day"],
            self.competitions.iter().map(|c| {
                vec![
                    c.id.clone(),
                    format!("{} \"Open\"", c.id),
                    c.year.to_string(),
                    "1".to_string(),
                    "1".to_string(),
                ]
            }),
        );

        write_tsv(
            &source.path(COUNTRIES_TABLE),
            &["id", "name", "continentId", "iso2"],
            self.countries.iter().map(|c| {
                vec![
                    c.id.clone(),
                    c.id.clone(),
                    c.continent_id.clone(),
                    c.id.chars().take(2).collect(),
                ]
            }),
        );

        write_tsv(
            &source.path(EVENTS_TABLE),
            &["id", "name", "rank", "format"],
            self.events.iter().enumerate().map(|(i, e)| {
                vec![
                    e.id.clone(),
                    format!("Event {}", e.id),
                    (i * 10).to_string(),
                    "time".to_string(),
                ]
            }),
        );

        write_tsv(
            &source.path(RESULTS_TABLE),
            &[
                "competitionId",
                "eventId",
                "roundTypeId",
                "pos",
                "best",
                "average",
                "personName",
                "personId",
                "personCountryId",
            ],
            self.results.iter().map(|r| {
                vec![
                    r.competition_id.clone(),
                    r.event_id.clone(),
                    "f".to_string(),
                    "1".to_string(),
                    r.best.to_string(),
                    r.average.to_string(),
                    format!("Person {}", r.person_id),
                    r.person_id.clone(),
                    r.person_country_id.clone(),
                ]
            }),
        );

        source
    }

    /// Contents of a file written to the output directory
    pub fn read_output(&self, file_name: &str) -> String {
        let path = self.output_dir().join(file_name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()))
    }
}

fn write_tsv<I>(path: &Path, headers: &[&str], rows: I)
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut wtr = WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_path(path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", path.display()));

    wtr.write_record(headers).expect("Failed to write header");
    for row in rows {
        wtr.write_record(&row).expect("Failed to write row");
    }
    wtr.flush().expect("Failed to flush table");
}

/// Parse a written ranks CSV into its data lines (header dropped)
pub fn data_lines(csv: &str) -> Vec<&str> {
    csv.lines().skip(1).collect()
}
