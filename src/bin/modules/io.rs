use super::cli::OutputFormat;
use super::error::CliError;
use adsorb::{AdsorbateJob, Placement, SelectionOutcome};
use prettytable::*;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub fn get_writer(output_path: &Option<PathBuf>) -> Result<Box<dyn Write>, CliError> {
    match output_path {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|e| CliError::Io {
                path: path.clone(),
                source: e,
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(std::io::stdout()))),
    }
}

pub fn write_results(
    mut writer: Box<dyn Write>,
    job: &AdsorbateJob,
    outcome: &SelectionOutcome,
    format: &OutputFormat,
    precision: usize,
    source_name: &str,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Pretty => write_pretty_table(&mut writer, job, outcome, source_name)?,
        OutputFormat::Json => write_json(&mut writer, outcome)?,
        OutputFormat::Csv => write_csv(&mut writer, outcome)?,
        OutputFormat::Xyz => {
            let coordinates = job.vacancies().ok_or(CliError::MissingCoordinates)?;
            write_xyz(&mut writer, job, outcome, coordinates, precision)?
        }
    }
    writer.flush()?;
    Ok(())
}

fn write_pretty_table(
    writer: &mut dyn Write,
    job: &AdsorbateJob,
    outcome: &SelectionOutcome,
    source_name: &str,
) -> Result<(), CliError> {
    let box_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Title],
            format::LineSeparator::new('═', '╪', '╞', '╡'),
        )
        .separators(
            &[format::LinePosition::Intern],
            format::LineSeparator::new('─', '┼', '├', '┤'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let no_intern_format = format::FormatBuilder::new()
        .column_separator('│')
        .borders('│')
        .separators(
            &[format::LinePosition::Top],
            format::LineSeparator::new('─', '┬', '╭', '╮'),
        )
        .separators(
            &[format::LinePosition::Bottom],
            format::LineSeparator::new('─', '┴', '╰', '╯'),
        )
        .padding(1, 1)
        .build();

    let mut title_table = Table::new();
    title_table.set_format(box_format);
    title_table.add_row(row![bc->"Adsorbate Configuration Selection"]);
    title_table.print(writer)?;
    writeln!(writer)?;

    let mut summary_table = Table::new();
    summary_table.set_format(no_intern_format);
    summary_table.add_row(row![b->"Job File:", source_name]);
    summary_table.add_row(row![b->"Job:", job.describe()]);
    summary_table.add_row(row![b->"Sites:", outcome.layout.site_count()]);
    summary_table.add_row(row![b->"Configurations:", outcome.vertex_count]);
    summary_table.add_row(row![b->"Graph Edges:", outcome.edge_count]);
    summary_table.add_row(row![b->"Maximum Degree:", outcome.max_degree]);
    summary_table.add_row(row![b->"Representatives:", outcome.representatives.len()]);
    summary_table.print(writer)?;
    writeln!(writer)?;

    let mut data_table = Table::new();
    data_table.set_format(box_format);
    data_table.set_titles(
        row![bc->"Index", bc->"Vertex", bc->"Degree", bc->"Adsorbates", bc->"Configuration"],
    );

    for (i, representative) in outcome.representatives.iter().enumerate() {
        data_table.add_row(row![
            r->i,
            r->representative.vertex,
            r->representative.degree,
            r->representative.placement.adsorbate_count(),
            l->render_placement(&representative.placement)
        ]);
    }

    data_table.print(writer)?;

    Ok(())
}

fn render_placement(placement: &Placement) -> String {
    let sites: Vec<String> = placement
        .sites
        .iter()
        .map(|labels| {
            let labels: Vec<String> = labels.iter().map(ToString::to_string).collect();
            format!("[{}]", labels.join(" "))
        })
        .collect();
    sites.join(" ")
}

fn write_json(writer: &mut dyn Write, outcome: &SelectionOutcome) -> Result<(), CliError> {
    writeln!(writer, "{{")?;
    writeln!(
        writer,
        "  \"points_per_site\": {:?},",
        outcome.layout.points_per_site()
    )?;
    writeln!(
        writer,
        "  \"adsorbate_per_site\": {:?},",
        outcome.layout.adsorbate_per_site()
    )?;
    writeln!(writer, "  \"configurations\": {},", outcome.vertex_count)?;
    writeln!(writer, "  \"edges\": {},", outcome.edge_count)?;
    writeln!(writer, "  \"max_degree\": {},", outcome.max_degree)?;
    writeln!(writer, "  \"representatives\": [")?;
    for (i, representative) in outcome.representatives.iter().enumerate() {
        let comma = if i < outcome.representatives.len() - 1 {
            ","
        } else {
            ""
        };
        let sites: Vec<String> = representative
            .placement
            .sites
            .iter()
            .map(|labels| {
                let labels: Vec<String> = labels
                    .iter()
                    .map(|label| match label.symbol() {
                        Some(symbol) => format!("\"{}\"", escape_json(symbol)),
                        None => "0".to_string(),
                    })
                    .collect();
                format!("[{}]", labels.join(", "))
            })
            .collect();

        writeln!(writer, "    {{")?;
        writeln!(writer, "      \"vertex\": {},", representative.vertex)?;
        writeln!(writer, "      \"degree\": {},", representative.degree)?;
        writeln!(writer, "      \"sites\": [{}]", sites.join(", "))?;
        writeln!(writer, "    }}{}", comma)?;
    }
    writeln!(writer, "  ]")?;
    writeln!(writer, "}}")?;
    Ok(())
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn write_csv(writer: &mut dyn Write, outcome: &SelectionOutcome) -> Result<(), CliError> {
    writeln!(writer, "representative,vertex,degree,site,slot,label")?;
    for (i, representative) in outcome.representatives.iter().enumerate() {
        for (site, labels) in representative.placement.sites.iter().enumerate() {
            for (slot, label) in labels.iter().enumerate() {
                writeln!(
                    writer,
                    "{},{},{},{},{},{}",
                    i, representative.vertex, representative.degree, site, slot, label
                )?;
            }
        }
    }
    Ok(())
}

fn write_xyz(
    writer: &mut dyn Write,
    job: &AdsorbateJob,
    outcome: &SelectionOutcome,
    coordinates: &[[f64; 3]],
    precision: usize,
) -> Result<(), CliError> {
    for (i, representative) in outcome.representatives.iter().enumerate() {
        let atoms = representative.placement.adsorbates_at(coordinates)?;
        writeln!(writer, "{}", atoms.len())?;
        writeln!(
            writer,
            "{} | representative {} | vertex {} | degree {}",
            job.describe(),
            i,
            representative.vertex,
            representative.degree
        )?;
        for atom in atoms {
            writeln!(
                writer,
                "{} {:.*} {:.*} {:.*}",
                atom.symbol,
                precision,
                atom.position[0],
                precision,
                atom.position[1],
                precision,
                atom.position[2]
            )?;
        }
    }
    Ok(())
}
