use anyhow::Result;
use article_metrics::{ArticlePipeline, BatchEngine, CliConfig, LocalStorage, OUTPUT_COLUMNS};
use httpmock::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// 在暫存目錄建立詞典、停用詞與輸入清單
fn setup_workspace(dir: &Path, input_rows: &[(&str, String)]) -> Result<CliConfig> {
    let dictionary = dir.join("MasterDictionary");
    let stop_words = dir.join("StopWords");
    std::fs::create_dir_all(&dictionary)?;
    std::fs::create_dir_all(&stop_words)?;

    std::fs::write(dictionary.join("positive-words.txt"), "good\ngrowth\nstrong\n")?;
    std::fs::write(dictionary.join("negative-words.txt"), "bad\nloss\nweak\n")?;
    std::fs::write(stop_words.join("StopWords_Generic.txt"), "the\nis\na\nand\n")?;
    std::fs::write(stop_words.join("StopWords_Names.txt"), "acme\n")?;

    let mut input = String::from("URL_ID,URL\n");
    for (id, url) in input_rows {
        input.push_str(&format!("{},{}\n", id, url));
    }
    let input_file = dir.join("Input.csv");
    std::fs::write(&input_file, input)?;

    Ok(CliConfig {
        input_file: input_file.to_str().unwrap().to_string(),
        output_path: dir.to_str().unwrap().to_string(),
        positive_words: dictionary.join("positive-words.txt").to_str().unwrap().to_string(),
        negative_words: dictionary.join("negative-words.txt").to_str().unwrap().to_string(),
        stop_words_dir: stop_words.to_str().unwrap().to_string(),
        request_timeout_seconds: Some(5),
        ..Default::default()
    })
}

fn read_output(path: &str) -> Result<Vec<csv::StringRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    assert_eq!(headers, OUTPUT_COLUMNS);
    Ok(reader.records().collect::<std::result::Result<Vec<_>, _>>()?)
}

#[tokio::test]
async fn test_end_to_end_with_real_http() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let article_mock = server.mock(|when, then| {
        when.method(GET).path("/news/acme");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(
                "<html><body><h1>Acme reports strong growth</h1>\
                 <p>The quarter is good.</p><p>A weak loss remains.</p></body></html>",
            );
    });
    let empty_mock = server.mock(|when, then| {
        when.method(GET).path("/news/empty");
        then.status(200).body("<html><body><div>no markup</div></body></html>");
    });

    let config = setup_workspace(
        temp_dir.path(),
        &[
            ("acme001", server.url("/news/acme")),
            ("empty002", server.url("/news/empty")),
        ],
    )?;

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ArticlePipeline::new(storage, config)?;
    let engine = BatchEngine::new(pipeline);

    let output_path = engine.run().await?;
    article_mock.assert();
    empty_mock.assert();

    assert!(output_path.ends_with("Output_Data_Structure.csv"));
    let rows = read_output(&output_path)?;
    assert_eq!(rows.len(), 2);

    // reports strong growth quarter good weak loss remains
    let acme = &rows[0];
    assert_eq!(&acme[0], "acme001");
    assert_eq!(&acme[1], server.url("/news/acme"));
    assert_eq!(&acme[2], "3");
    assert_eq!(&acme[3], "2");
    assert_eq!(&acme[11], "8");
    assert_eq!(&acme[6], &acme[9]);

    let polarity: f64 = acme[4].parse()?;
    assert!((polarity - 1.0 / (5.0 + 0.000001)).abs() < 1e-9);

    let empty = &rows[1];
    assert_eq!(&empty[0], "empty002");
    assert_eq!(&empty[11], "6");

    let saved = std::fs::read_to_string(temp_dir.path().join("articles/acme001.txt"))?;
    assert_eq!(
        saved,
        "Acme reports strong growth\nThe quarter is good. A weak loss remains."
    );
    let sentinel = std::fs::read_to_string(temp_dir.path().join("articles/empty002.txt"))?;
    assert_eq!(sentinel, "No Title Found\nNo Content Found");

    Ok(())
}

#[tokio::test]
async fn test_failed_fetch_still_emits_row() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let ok_mock = server.mock(|when, then| {
        when.method(GET).path("/ok");
        then.status(200).body("<h1>Fine</h1><p>good</p>");
    });

    let config = setup_workspace(
        temp_dir.path(),
        &[
            ("1", "http://127.0.0.1:9/refused".to_string()),
            ("2", server.url("/ok")),
            ("3", "not-a-url".to_string()),
        ],
    )?;

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ArticlePipeline::new(storage, config)?;
    let output_path = BatchEngine::new(pipeline).run().await?;
    ok_mock.assert();

    let rows = read_output(&output_path)?;
    let ids: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);

    for failed in [&rows[0], &rows[2]] {
        for index in 2..OUTPUT_COLUMNS.len() {
            assert_eq!(&failed[index], "0", "column {}", OUTPUT_COLUMNS[index]);
        }
    }
    assert_eq!(&rows[1][2], "1");

    let failed_text = std::fs::read_to_string(temp_dir.path().join("articles/1.txt"))?;
    assert!(failed_text.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_error_status_body_is_still_parsed() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let not_found = server.mock(|when, then| {
        when.method(GET).path("/gone");
        then.status(404).body("<h1>Page not found</h1><p>Sorry, bad link.</p>");
    });

    let config = setup_workspace(temp_dir.path(), &[("404", server.url("/gone"))])?;
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ArticlePipeline::new(storage, config)?;
    let output_path = BatchEngine::new(pipeline).run().await?;
    not_found.assert();

    let rows = read_output(&output_path)?;
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][3], "1");

    Ok(())
}

#[tokio::test]
async fn test_json_output_format() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/a");
        then.status(200).body("<h1>Title</h1><p>strong growth</p>");
    });

    let mut config = setup_workspace(temp_dir.path(), &[("a", server.url("/a"))])?;
    config.output_formats = vec!["json".to_string(), "tsv".to_string()];

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ArticlePipeline::new(storage, config)?;
    let output_path = BatchEngine::new(pipeline).run().await?;

    assert!(output_path.ends_with("Output_Data_Structure.json"));
    let rows: Vec<serde_json::Value> = serde_json::from_str(&std::fs::read_to_string(&output_path)?)?;
    assert_eq!(rows[0]["URL_ID"], "a");
    assert_eq!(rows[0]["POSITIVE SCORE"], 2);
    assert_eq!(rows[0]["AVG SENTENCE LENGTH"], rows[0]["AVG NUMBER OF WORDS PER SENTENCE"]);

    assert!(temp_dir.path().join("Output_Data_Structure.tsv").exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_lexicon_is_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = setup_workspace(temp_dir.path(), &[])?;
    config.stop_words_dir = temp_dir.path().join("NoSuchDir").to_str().unwrap().to_string();

    let storage = LocalStorage::new(config.output_path.clone());
    let err = ArticlePipeline::new(storage, config).err().expect("lexicon load must fail");
    assert!(matches!(err, article_metrics::AnalyzerError::LexiconError { .. }));
    assert_eq!(err.exit_code(), 3);

    Ok(())
}

#[tokio::test]
async fn test_empty_input_writes_header_only() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = setup_workspace(temp_dir.path(), &[])?;

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ArticlePipeline::new(storage, config)?;
    let output_path = BatchEngine::new(pipeline).run().await?;

    assert!(read_output(&output_path)?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_xlsx_input_and_output() -> Result<()> {
    use calamine::{Data, Reader};

    let temp_dir = TempDir::new()?;
    let server = MockServer::start();

    let page = server.mock(|when, then| {
        when.method(GET).path("/sheet");
        then.status(200).body("<h1>Strong quarter</h1><p>good growth</p>");
    });

    let mut config = setup_workspace(temp_dir.path(), &[])?;

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "URL_ID")?;
    sheet.write_string(0, 1, "URL")?;
    sheet.write_string(1, 0, "blackassign0001")?;
    sheet.write_string(1, 1, server.url("/sheet"))?;
    let input_file = temp_dir.path().join("Input.xlsx");
    workbook.save(&input_file)?;

    config.input_file = input_file.to_str().unwrap().to_string();
    config.output_formats = vec!["xlsx".to_string(), "csv".to_string()];

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ArticlePipeline::new(storage, config)?;
    let output_path = BatchEngine::new(pipeline).run().await?;
    page.assert();

    assert!(output_path.ends_with("Output_Data_Structure.xlsx"));
    let mut output: calamine::Xlsx<_> = calamine::open_workbook(&output_path)?;
    let range = output.worksheet_range_at(0).unwrap()?;
    assert_eq!(range.height(), 2);
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("URL_ID".to_string())));
    assert_eq!(
        range.get_value((1, 0)),
        Some(&Data::String("blackassign0001".to_string()))
    );
    // strong quarter good growth
    assert_eq!(range.get_value((1, 2)), Some(&Data::Float(3.0)));

    let csv_rows = read_output(temp_dir.path().join("Output_Data_Structure.csv").to_str().unwrap())?;
    assert_eq!(&csv_rows[0][0], "blackassign0001");
    assert_eq!(&csv_rows[0][2], "3");

    Ok(())
}
