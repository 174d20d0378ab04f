use crate::config::CloudConfig;
use crate::ir::KeywordStat;
use crate::layout::CloudLayout;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Placement data in the shape a web frontend positions spans with.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub width: f64,
    pub height: f64,
    pub keywords: Vec<KeywordDump>,
    pub dropped: Vec<KeywordStat>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordDump {
    pub keyword: String,
    pub count: u64,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutDump {
    pub fn from_layout(layout: &CloudLayout, config: &CloudConfig) -> Self {
        let keywords = layout
            .placed
            .iter()
            .map(|entry| {
                let bounds = entry.bounds(config);
                KeywordDump {
                    keyword: entry.keyword.keyword.clone(),
                    count: entry.keyword.count,
                    x: entry.x,
                    y: entry.y,
                    font_size: entry.font_size,
                    width: bounds.width,
                    height: bounds.height,
                }
            })
            .collect();

        LayoutDump {
            width: layout.width,
            height: layout.height,
            keywords,
            dropped: layout.dropped.clone(),
        }
    }
}

pub fn write_layout_dump(
    path: Option<&Path>,
    layout: &CloudLayout,
    config: &CloudConfig,
) -> anyhow::Result<()> {
    let dump = LayoutDump::from_layout(layout, config);
    match path {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(writer, &dump)?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, &dump)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
