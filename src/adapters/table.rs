use crate::domain::model::{ScoredRow, UrlEntry, OUTPUT_COLUMNS};
use crate::utils::error::{AnalyzerError, Result};
use calamine::{Data, Reader};
use rust_xlsxwriter::Workbook;
use std::io::Cursor;
use std::path::Path;

pub const URL_ID_COLUMN: &str = "URL_ID";
pub const URL_COLUMN: &str = "URL";

const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xls", "ods"];

/// 解析輸入表格，需有 URL_ID 與 URL 欄位，其他欄位忽略。
/// 依副檔名選擇讀取方式：試算表走 calamine，其餘視為 CSV/TSV。
pub fn read_url_entries(data: &[u8], source: &str) -> Result<Vec<UrlEntry>> {
    let extension = Path::new(source)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let (headers, rows) = if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        read_workbook(data)?
    } else {
        let delimiter = if extension == "tsv" { b'\t' } else { b',' };
        read_delimited(data, delimiter)?
    };

    let column = |name: &str| {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| AnalyzerError::MissingColumnError {
                path: source.to_string(),
                column: name.to_string(),
            })
    };
    let id_index = column(URL_ID_COLUMN)?;
    let url_index = column(URL_COLUMN)?;

    let entries: Vec<UrlEntry> = rows
        .into_iter()
        .map(|row| UrlEntry {
            url_id: row.get(id_index).cloned().unwrap_or_default(),
            url: row.get(url_index).cloned().unwrap_or_default(),
        })
        .collect();

    tracing::debug!("Read {} URL entries from {}", entries.len(), source);
    Ok(entries)
}

type RawTable = (Vec<String>, Vec<Vec<String>>);

fn read_delimited(data: &[u8], delimiter: u8) -> Result<RawTable> {
    // 只修剪標題，資料欄位原樣保留
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(data);

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }
    Ok((headers, rows))
}

fn read_workbook(data: &[u8]) -> Result<RawTable> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(data.to_vec()))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok((Vec::new(), Vec::new())),
    };

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect::<Vec<String>>());
    let headers = rows.next().unwrap_or_default();
    Ok((headers, rows.collect()))
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}

pub fn render_delimited(rows: &[ScoredRow], delimiter: u8) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_COLUMNS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }

    writer
        .into_inner()
        .map_err(|e| AnalyzerError::IoError(e.into_error()))
}

pub fn render_json(rows: &[ScoredRow]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(rows)?)
}

/// 單一工作表；URL_ID/URL 寫成文字，其餘欄位寫成數值
pub fn render_xlsx(rows: &[ScoredRow]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in OUTPUT_COLUMNS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let line = index as u32 + 1;
        for (col, value) in row.to_record().iter().enumerate() {
            match value.parse::<f64>() {
                Ok(number) if col >= 2 => worksheet.write_number(line, col as u16, number)?,
                _ => worksheet.write_string(line, col as u16, value)?,
            };
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// 依格式名稱輸出，回傳 (副檔名, 內容)
pub fn render(rows: &[ScoredRow], format: &str) -> Result<(&'static str, Vec<u8>)> {
    match format {
        "csv" => Ok(("csv", render_delimited(rows, b',')?)),
        "tsv" => Ok(("tsv", render_delimited(rows, b'\t')?)),
        "json" => Ok(("json", render_json(rows)?)),
        "xlsx" => Ok(("xlsx", render_xlsx(rows)?)),
        other => Err(AnalyzerError::InvalidConfigValueError {
            field: "output_formats".to_string(),
            value: other.to_string(),
            reason: "Unsupported format".to_string(),
        }),
    }
}
