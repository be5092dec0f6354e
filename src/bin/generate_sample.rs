//! Writes a small deterministic CSV for trying out the grid editor.

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let names = ["Alice", "Bob", "Carol", "Dave", "Erin", "Frank"];
    let departments = ["Engineering", "Sales", "Support"];
    let cities = ["Oslo", "Lima", "Porto", "Kyoto"];

    let mut out = String::from("id,name,department,city,score\n");
    let mut rows = 0;
    for (i, name) in names.iter().enumerate() {
        for (j, dept) in departments.iter().enumerate() {
            let city = cities[(i + j) % cities.len()];
            let score = (i * 17 + j * 5) % 100;
            out.push_str(&format!("{rows},{name},{dept},{city},{score}\n"));
            rows += 1;
        }
    }

    let path = "sample_data.csv";
    std::fs::write(path, out).with_context(|| format!("writing {path}"))?;
    println!("Wrote {rows} rows to {path}");
    Ok(())
}
