use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const FAMILIES: [&str; 5] = ["wrsi", "ndvi", "cps", "spi", "resid"];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out = Path::new(&out_dir);

    // Compress the boundary GeoJSON; the store inflates gzip payloads on read.
    // A missing fixture is embedded as an empty file so the app fails
    // visibly at load time instead of at build time.
    let boundaries_src = Path::new("../fixtures/gadm41_BFA_3.json");
    let boundaries_dest = out.join("gadm41_BFA_3.json.gz");
    if boundaries_src.exists() {
        let raw = fs::read(boundaries_src).expect("Failed to read gadm41_BFA_3.json");
        let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
        encoder.write_all(&raw).unwrap();
        fs::write(&boundaries_dest, encoder.finish().unwrap()).unwrap();
    } else {
        println!("cargo:warning=../fixtures/gadm41_BFA_3.json not found, embedding an empty boundary file");
        fs::write(&boundaries_dest, b"").unwrap();
    }

    let workbook_src = Path::new("../fixtures/index_data.xlsx");
    let workbook_dest = out.join("index_data.xlsx");
    if workbook_src.exists() {
        fs::copy(workbook_src, &workbook_dest).unwrap();
    } else {
        println!("cargo:warning=../fixtures/index_data.xlsx not found, embedding an empty workbook");
        fs::write(&workbook_dest, b"").unwrap();
    }

    // Animations are served next to the app; only record which ones exist.
    let mut manifest = String::new();
    for family in FAMILIES {
        let relative = format!("animations/{}.gif", family);
        if Path::new("../fixtures").join(&relative).exists() {
            manifest.push_str(&relative);
            manifest.push('\n');
        }
    }
    fs::write(out.join("animations.txt"), manifest).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/gadm41_BFA_3.json");
    println!("cargo:rerun-if-changed=../fixtures/index_data.xlsx");
    println!("cargo:rerun-if-changed=../fixtures/animations");
}
