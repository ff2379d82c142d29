use assert_fs::prelude::*;
use dirdigest::{run, Config, Error};

fn build(root: &std::path::Path, out: &std::path::Path, include: &str, exclude: &str) -> Config {
    Config::builder()
        .root_dir(root)
        .include_extensions(include)
        .exclude_extensions(exclude)
        .output_dir(out)
        .build()
        .unwrap()
}

#[test]
fn two_files_in_alphabetical_order() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("demo");
    root.child("a.go").write_str("package main").unwrap();
    root.child("b.md").write_str("# Title\ntext").unwrap();
    let out = temp.child("reports");

    let stats = run(build(root.path(), out.path(), "go,md", "")).unwrap();

    assert_eq!(stats.statistics.total_files, 2);
    assert_eq!(stats.statistics.total_size_bytes, 24);
    assert_eq!(stats.statistics.total_tokens, 4);

    let sep = "=".repeat(48);
    let a = root.path().join("a.go");
    let b = root.path().join("b.md");
    let content = std::fs::read_to_string(out.child("content.txt").path()).unwrap();
    assert_eq!(
        content,
        format!(
            "{sep}\nFile 1: {}\n{sep}\npackage main\n\n{sep}\nFile 2: {}\n{sep}\n# Title\ntext\n",
            a.display(),
            b.display()
        )
    );

    out.child("summary.txt").assert(
        "Statistics Summary\n\
         =================\n\
         Total files processed: 2\n\
         Total file size: 0.02 KB (0.00 MB)\n\
         Average file size: 0.01 KB\n\
         Total tokens: 4\n\
         Average tokens per file: 2.00\n",
    );
}

#[test]
fn nested_tree_is_deterministic_across_runs() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("repo");
    root.child("docs/guide/setup.md").write_str("setup steps").unwrap();
    root.child("docs/intro.md").write_str("intro").unwrap();
    root.child("cmd/main.go").write_str("package main").unwrap();
    root.child("style.css").write_str("body {}").unwrap();
    root.child("README.md").write_str("readme").unwrap();

    let first = temp.child("first");
    let second = temp.child("second");
    run(build(root.path(), first.path(), "md,go,css", "css")).unwrap();
    run(build(root.path(), second.path(), "md,go,css", "css")).unwrap();

    let tree = std::fs::read_to_string(first.child("directory-structure.txt").path()).unwrap();
    let again = std::fs::read_to_string(second.child("directory-structure.txt").path()).unwrap();
    assert_eq!(tree, again);

    let expected = [
        "Directory structure:",
        "└── repo/",
        "    ├── README.md",
        "    ├── cmd/",
        "    │   ├── main.go",
        "    ├── docs/",
        "    │   ├── guide/",
        "    │   │   ├── setup.md",
        "    │   ├── intro.md",
        "",
    ]
    .join("\n");
    assert_eq!(tree, expected);
}

#[test]
fn missing_root_is_reported_before_any_output() {
    let temp = assert_fs::TempDir::new().unwrap();

    let err = Config::builder()
        .root_dir(temp.path().join("nope"))
        .output_dir(temp.path())
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::RootNotFound { .. }));
    temp.child("summary.txt").assert(predicates::path::missing());
}
