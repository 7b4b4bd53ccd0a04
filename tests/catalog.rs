// Catalog queries and deletions over loaded course files.
mod support;

use anyhow::Result;
use chrono::NaiveDate;
use course_catalog::{
    Catalog, CatalogError, Course, Level, LoadError, Loader, ParseError, ParsePolicy,
    load_from_path,
};
use std::collections::BTreeSet;
use std::io::Write;

use support::{SCENARIO, course_file};

fn names(set: BTreeSet<String>) -> Vec<String> {
    set.into_iter().collect()
}

#[test]
fn scenario_load_query_and_remove() -> Result<()> {
    let file = course_file(SCENARIO)?;
    let mut catalog = load_from_path(file.path())?;

    assert_eq!(names(catalog.categories()), vec!["BASES DE DATOS", "CMS"]);
    assert_eq!(catalog.count_in("cms"), 2);
    assert_eq!(catalog.oldest(), "course B");

    let removed = catalog.remove_by_level("CMS", Level::Advanced)?;
    assert_eq!(names(removed), vec!["course B"]);
    let remaining: Vec<_> = catalog
        .courses_in("cms")
        .expect("CMS present")
        .iter()
        .map(Course::name)
        .collect();
    assert_eq!(remaining, vec!["course A"]);

    assert!(catalog.remove_by_level("CMS", Level::Advanced)?.is_empty());
    Ok(())
}

// Counts across categories add up to the number of records in the file.
#[test]
fn counts_sum_to_loaded_lines() -> Result<()> {
    let lines = [
        "devops:docker:1/1/2018:beginner",
        "DevOps:kubernetes:2/2/2019:advanced",
        "cms:wordpress:3/3/2020:intermediate",
        "  data : pandas : 4/4/2021 : Beginner  ",
        "web:html:5/5/2015:principiante",
    ];
    let file = course_file(&lines.join("\n"))?;
    let catalog = load_from_path(file.path())?;

    let sum: i64 = catalog
        .categories()
        .iter()
        .map(|category| catalog.count_in(category))
        .sum();
    assert_eq!(sum, lines.len() as i64);
    assert_eq!(catalog.total(), lines.len());
    assert_eq!(catalog.count_in("DEVOPS"), 2);
    assert_eq!(catalog.count_in("mobile"), -1);
    Ok(())
}

#[test]
fn oldest_across_categories() {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid date");
    let mut catalog = Catalog::new();
    assert_eq!(catalog.oldest(), "");

    catalog.add("b", Course::new("first", date(2019, 1, 1), Level::Beginner));
    catalog.add("a", Course::new("second", date(2018, 6, 15), Level::Advanced));
    catalog.add("c", Course::new("third", date(2020, 3, 3), Level::Intermediate));
    assert_eq!(catalog.oldest(), "second");
}

#[test]
fn removing_from_unknown_category_is_an_error() -> Result<()> {
    let file = course_file(SCENARIO)?;
    let mut catalog = load_from_path(file.path())?;
    let err = catalog
        .remove_by_level("devops", Level::Beginner)
        .expect_err("unknown category");
    assert_eq!(err, CatalogError::UnknownCategory("DEVOPS".to_string()));
    assert_eq!(catalog.total(), 3);
    Ok(())
}

#[test]
fn unknown_level_aborts_the_load() -> Result<()> {
    let file = course_file(&format!("{SCENARIO}CMS:course D:4/4/2022:expert\n"))?;
    let err = load_from_path(file.path()).expect_err("expert is not a level");
    match err {
        LoadError::Parse { line, source } => {
            assert_eq!(line, 4);
            assert_eq!(source, ParseError::UnknownLevel("expert".to_string()));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn skip_policy_keeps_valid_records() -> Result<()> {
    let file = course_file(&format!(
        "CMS:course D:4/13/2022:beginner\n{SCENARIO}CMS:course E:1/1/2022:expert\n"
    ))?;
    let catalog = Loader::new(ParsePolicy::Skip).load_path(file.path())?;
    assert_eq!(catalog.total(), 3);
    assert_eq!(catalog.count_in("cms"), 2);
    Ok(())
}

// A Latin-1 encoded record is a bad line, not an unreadable file.
#[test]
fn non_utf8_line_is_skipped_or_reported_with_its_number() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"CMS:course A:1/1/2020:principiante\n")?;
    file.write_all(b"CMS:dise\xf1o web:2/2/2019:avanzado\n")?;
    file.write_all(b"CMS:course C:3/3/2021:avanzado\n")?;
    file.flush()?;

    let catalog = Loader::new(ParsePolicy::Skip).load_path(file.path())?;
    assert_eq!(catalog.count_in("cms"), 2);
    assert_eq!(catalog.oldest(), "course A");

    let err = load_from_path(file.path()).expect_err("abort on encoding error");
    assert!(
        matches!(
            err,
            LoadError::Parse {
                line: 2,
                source: ParseError::Encoding { .. }
            }
        ),
        "unexpected error {err:?}"
    );
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_from_path(std::path::Path::new("/nonexistent/courses.txt"))
        .expect_err("missing file");
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn bundled_data_file_loads() -> Result<()> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/courses.txt");
    let catalog = load_from_path(&path)?;
    assert_eq!(
        names(catalog.categories()),
        vec!["BASES DE DATOS", "CMS", "DESARROLLO WEB"]
    );
    assert_eq!(catalog.total(), 12);
    assert_eq!(catalog.oldest(), "joomla templates");
    Ok(())
}
