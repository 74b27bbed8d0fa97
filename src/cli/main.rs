use std::io::{self, Write};
use structopt::*;
use anyhow::{Context, bail};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use colstat::*;
use colstat::ops;
use colstat::io as snapshot;
use colstat::sort::{self, SortDirection};
use colstat::stat;

/// Inspect, sort, export and summarize column store snapshots
#[derive(StructOpt, Debug)]
pub enum Colstat {

    /// Prints the attributes and the first rows of a snapshot.
    Summary {
        src : String,

        #[structopt(short)]
        rows : Option<usize>
    },

    /// Prints descriptive statistics for every attribute.
    Describe {
        src : String
    },

    /// Sorts a snapshot by one or more attributes (most significant first).
    Sort {
        src : String,

        #[structopt(short)]
        attributes : Vec<String>,

        #[structopt(long)]
        desc : bool,

        #[structopt(short)]
        output : String
    },

    /// Writes a snapshot as CSV, to stdout unless an output path is given.
    Export {
        src : String,

        #[structopt(short)]
        output : Option<String>
    },

    /// Prints the correlation matrix of the float attributes.
    Corr {
        src : String
    },

    /// Prints the principal component variances of the float attributes.
    Pca {
        src : String
    }

}

fn open(src : &str) -> anyhow::Result<DenseInstances> {
    snapshot::load_from_path(src).with_context(|| format!("Error opening snapshot {}", src) )
}

fn float_attributes(inst : &DenseInstances) -> Vec<Attribute> {
    inst.attributes().into_iter().filter(|a| a.kind() == AttributeKind::Float ).collect()
}

fn describe(inst : &DenseInstances) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for attr in inst.attributes() {
        let spec = inst.attribute_spec(&attr)?;
        match attr.kind() {
            AttributeKind::Float => {
                let mut vals = ops::column_f64(inst, &attr)?;
                vals.retain(|v| !v.is_nan() );
                if vals.is_empty() {
                    writeln!(out, "{}\tfloat\tempty", attr.name())?;
                    continue;
                }
                stat::sort_weighted(&mut vals[..], None);
                let (m, sd) = stat::mean_std_dev(&vals[..], None);
                writeln!(
                    out, "{}\tfloat\tn={}\tmean={:.4}\tsd={:.4}\tmin={:.4}\tmedian={:.4}\tmax={:.4}",
                    attr.name(), vals.len(), m, sd, vals[0],
                    stat::quantile(0.5, stat::CumulantKind::Empirical, &vals[..], None),
                    vals[vals.len() - 1]
                )?;
            },
            AttributeKind::Categorical | AttributeKind::Binary => {
                let mut counts = std::collections::BTreeMap::new();
                for row in 0..inst.rows() {
                    *counts.entry(inst.get_string(&spec, row)?).or_insert(0usize) += 1;
                }
                let dist : Vec<String> = counts.iter().map(|(k, v)| format!("{}:{}", k, v) ).collect();
                writeln!(out, "{}\t{}\t{}", attr.name(), attr.kind(), dist.join(" "))?;
            }
        }
    }
    Ok(())
}

fn print_matrix(names : &[Attribute], m : &nalgebra::DMatrix<f64>) -> anyhow::Result<()> {
    let header : Vec<&str> = names.iter().map(|a| a.name() ).collect();
    println!("\t{}", header.join("\t"));
    for (i, a) in names.iter().enumerate() {
        let row : Vec<String> = (0..m.ncols()).map(|j| format!("{:.4}", m[(i, j)]) ).collect();
        println!("{}\t{}", a.name(), row.join("\t"));
    }
    Ok(())
}

fn run(cmd : Colstat) -> anyhow::Result<()> {
    match cmd {
        Colstat::Summary { src, rows } => {
            let mut inst = open(&src)?;
            if let Some(n) = rows {
                inst.set_display_rows(n);
            }
            print!("{}", inst);
            Ok(())
        },
        Colstat::Describe { src } => {
            describe(&open(&src)?)
        },
        Colstat::Sort { src, attributes, desc, output } => {
            if attributes.is_empty() {
                bail!("At least one sort attribute is required");
            }
            let mut inst = open(&src)?;
            let mut specs = Vec::new();
            for name in attributes.iter() {
                let attr = ops::attribute_by_name(&inst, name)
                    .with_context(|| format!("Unknown attribute: {}", name) )?;
                specs.push(inst.attribute_spec(&attr)?);
            }
            let direction = if desc { SortDirection::Descending } else { SortDirection::Ascending };
            sort::sort(&mut inst, direction, &specs[..])?;
            snapshot::save_to_path(&inst, &output).with_context(|| format!("Error writing {}", output) )?;
            debug!("Sorted snapshot written to {}", output);
            Ok(())
        },
        Colstat::Export { src, output } => {
            let inst = open(&src)?;
            match output {
                Some(path) => snapshot::write_csv_to_path(&inst, &path)
                    .with_context(|| format!("Error writing {}", path) )?,
                None => snapshot::write_csv(&inst, io::stdout())?
            }
            Ok(())
        },
        Colstat::Corr { src } => {
            let inst = open(&src)?;
            let attrs = float_attributes(&inst);
            if attrs.is_empty() {
                bail!("No float attributes in {}", src);
            }
            let m = colstat::matrix::to_matrix(&inst, &attrs[..])?;
            print_matrix(&attrs[..], &stat::correlation_matrix(&m, None))
        },
        Colstat::Pca { src } => {
            let inst = open(&src)?;
            let attrs = float_attributes(&inst);
            let m = colstat::matrix::to_matrix(&inst, &attrs[..])?;
            let pc = stat::principal_components(&m, None)?;
            let total : f64 = pc.variances.iter().sum();
            for (i, v) in pc.variances.iter().enumerate() {
                println!("PC{}\t{:.4}\t{:.2}%", i + 1, v, 100.0 * v / total);
            }
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn") );
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    run(Colstat::from_args())
}
