use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const POSITIONS: [&str; 4] = ["GK", "DF", "MF", "FW"];
const TEAMS: [&str; 8] = [
    "Atlético Norte",
    "Bahía FC",
    "Club Sur",
    "Deportivo Este",
    "Estrella Roja",
    "Fénix United",
    "Granada Azul",
    "Halcones",
];
const NATIONS: [&str; 6] = ["Argentina", "Brazil", "Chile", "Colombia", "Spain", "Uruguay"];
const PROFILES: [&str; 5] = ["Playmaker", "Finisher", "Ball winner", "Dribbler", "Sweeper"];
const FIRST_NAMES: [&str; 10] = [
    "Alejo", "Bruno", "Carlos", "Diego", "Emilio", "Franco", "Gonzalo", "Hugo", "Iván", "Joaquín",
];
const LAST_NAMES: [&str; 10] = [
    "Acosta", "Benítez", "Castro", "Duarte", "Espinoza", "Ferreyra", "Guzmán", "Herrera",
    "Ibarra", "Jiménez",
];
const METRICS: [&str; 10] = [
    "Matches Index",
    "Conditional index",
    "Goal Involment Index",
    "Passing Index",
    "Technical Skills Index",
    "Offensive Index",
    "Defensive index",
    "Performance Index",
    "xPerformance Index",
    "Scouting Index",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

#[derive(Debug, Serialize)]
struct SampleRow {
    #[serde(rename = "Player Name")]
    name: String,
    #[serde(rename = "Position")]
    position: String,
    #[serde(rename = "Age")]
    age: i64,
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "Nationship")]
    nationality: String,
    #[serde(rename = "Photo")]
    photo: String,
    #[serde(rename = "Profile Main Characteristic")]
    profile: String,
    #[serde(rename = "Market Value (M)")]
    market_value: f64,
    #[serde(rename = "Matches Index")]
    matches: f64,
    #[serde(rename = "Conditional index")]
    conditional: f64,
    #[serde(rename = "Goal Involment Index")]
    goal_involvement: f64,
    #[serde(rename = "Passing Index")]
    passing: f64,
    #[serde(rename = "Technical Skills Index")]
    technical: f64,
    #[serde(rename = "Offensive Index")]
    offensive: f64,
    #[serde(rename = "Defensive index")]
    defensive: f64,
    #[serde(rename = "Performance Index")]
    performance: f64,
    #[serde(rename = "xPerformance Index")]
    expected_performance: f64,
    #[serde(rename = "Scouting Index")]
    scouting: f64,
}

impl SampleRow {
    /// Metric values in column order.
    fn metrics(&self) -> [f64; 10] {
        [
            self.matches,
            self.conditional,
            self.goal_involvement,
            self.passing,
            self.technical,
            self.offensive,
            self.defensive,
            self.performance,
            self.expected_performance,
            self.scouting,
        ]
    }
}

/// Per-position offsets so each group has a recognisable radar shape.
fn position_bias(position: &str, metric: usize) -> f64 {
    match (position, metric) {
        ("GK", 6) | ("DF", 6) => 15.0,
        ("GK", 2) | ("GK", 5) => -20.0,
        ("FW", 2) | ("FW", 5) => 15.0,
        ("MF", 3) | ("MF", 4) => 12.0,
        _ => 0.0,
    }
}

fn generate(rng: &mut SimpleRng, count: usize) -> Vec<SampleRow> {
    (0..count)
        .map(|i| {
            let position = POSITIONS[i % POSITIONS.len()].to_string();
            let mut metrics = [0.0; 10];
            for (m, slot) in metrics.iter_mut().enumerate() {
                let v = rng.gauss(55.0 + position_bias(&position, m), 12.0);
                *slot = (v.clamp(0.0, 100.0) * 100.0).round() / 100.0;
            }
            SampleRow {
                name: format!("{} {}", rng.pick(&FIRST_NAMES), rng.pick(&LAST_NAMES)),
                age: rng.gauss(26.0, 4.0).round().clamp(16.0, 40.0) as i64,
                team: rng.pick(&TEAMS).to_string(),
                nationality: rng.pick(&NATIONS).to_string(),
                photo: format!("https://picsum.photos/seed/player{i}/150/150"),
                profile: rng.pick(&PROFILES).to_string(),
                market_value: (rng.next_f64().powi(2) * 80.0 * 10.0).round() / 10.0 + 0.5,
                position,
                matches: metrics[0],
                conditional: metrics[1],
                goal_involvement: metrics[2],
                passing: metrics[3],
                technical: metrics[4],
                offensive: metrics[5],
                defensive: metrics[6],
                performance: metrics[7],
                expected_performance: metrics[8],
                scouting: metrics[9],
            }
        })
        .collect()
}

fn write_csv(path: &Path, rows: &[SampleRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[SampleRow]) -> Result<()> {
    let strings = |f: fn(&SampleRow) -> &str| -> ArrayRef {
        Arc::new(StringArray::from(rows.iter().map(f).collect::<Vec<_>>()))
    };

    let mut fields = vec![
        Field::new("Player Name", DataType::Utf8, false),
        Field::new("Position", DataType::Utf8, false),
        Field::new("Age", DataType::Int64, false),
        Field::new("Team", DataType::Utf8, false),
        Field::new("Nationship", DataType::Utf8, true),
        Field::new("Photo", DataType::Utf8, true),
        Field::new("Profile Main Characteristic", DataType::Utf8, true),
        Field::new("Market Value (M)", DataType::Float64, true),
    ];
    let mut columns: Vec<ArrayRef> = vec![
        strings(|r| r.name.as_str()),
        strings(|r| r.position.as_str()),
        Arc::new(Int64Array::from(rows.iter().map(|r| r.age).collect::<Vec<_>>())),
        strings(|r| r.team.as_str()),
        strings(|r| r.nationality.as_str()),
        strings(|r| r.photo.as_str()),
        strings(|r| r.profile.as_str()),
        Arc::new(Float64Array::from(
            rows.iter().map(|r| r.market_value).collect::<Vec<_>>(),
        )),
    ];
    for (m, name) in METRICS.iter().enumerate() {
        fields.push(Field::new(*name, DataType::Float64, true));
        columns.push(Arc::new(Float64Array::from(
            rows.iter().map(|r| r.metrics()[m]).collect::<Vec<_>>(),
        )));
    }

    let schema = Arc::new(Schema::new(fields));
    let batch = RecordBatch::try_new(schema.clone(), columns).context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate(&mut rng, 160);

    let dir = Path::new("data");
    std::fs::create_dir_all(dir).context("creating data directory")?;

    let csv_path = dir.join("players.csv");
    write_csv(&csv_path, &rows)?;
    let parquet_path = dir.join("players.parquet");
    write_parquet(&parquet_path, &rows)?;

    println!(
        "Wrote {} players to {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}
