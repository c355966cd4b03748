use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{json, Value};
use tempfile::TempDir;

const SHIRT: &str = "11111111-1111-4111-8111-111111111111";
const PANTS: &str = "22222222-2222-4222-8222-222222222222";
const SCARF: &str = "44444444-4444-4444-8444-444444444444";
const OUTFIT: &str = "33333333-3333-4333-8333-333333333333";

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_wardrobe"))
}

fn fixture() -> Value {
    json!({
        "garments": [
            {
                "id": SHIRT,
                "name": "Oxford shirt",
                "category": "tops",
                "color": "blue",
                "purchase_price": 40.0,
                "times_worn": 4,
                "last_worn": "2024-05-01"
            },
            {
                "id": PANTS,
                "name": "Chinos",
                "category": "bottoms",
                "garment_type": "pants",
                "color": "beige",
                "purchase_price": 120.0,
                "times_worn": 0
            },
            {
                "id": SCARF,
                "name": "Wool scarf",
                "category": "accessories",
                "color": "red",
                "purchase_price": 30.0,
                "times_worn": 2,
                "last_worn": "2023-12-01",
                "archived": true
            }
        ],
        "outfits": [
            {
                "id": OUTFIT,
                "name": "Office Friday",
                "items": [SHIRT, PANTS],
                "occasions": ["work"],
                "seasons": ["all_year"]
            }
        ]
    })
}

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        let dir = TempDir::new().expect("temp dir");
        std::fs::create_dir_all(dir.path().join("config")).expect("config dir");
        std::fs::create_dir_all(dir.path().join("data")).expect("data dir");
        Self { dir }
    }

    fn snapshot(&self) -> PathBuf {
        self.dir.path().join("wardrobe.json")
    }

    fn write_snapshot(&self, body: &Value) -> PathBuf {
        let path = self.snapshot();
        std::fs::write(&path, serde_json::to_vec_pretty(body).unwrap()).expect("write snapshot");
        path
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("XDG_DATA_HOME", self.dir.path().join("data"))
            .env("NO_COLOR", "1")
            .env_remove("WARDROBE_CONFIG")
            .env_remove("WARDROBE_SNAPSHOT")
            .env_remove("WARDROBE_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        let snapshot = self.snapshot();
        let mut cmd = self.command();
        cmd.arg("--snapshot").arg(&snapshot).args(args);
        cmd.output().expect("run wardrobe")
    }
}

fn json_stdout(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn garment_from_disk(path: &Path, id: &str) -> Value {
    let raw = std::fs::read(path).expect("read snapshot");
    let snapshot: Value = serde_json::from_slice(&raw).expect("parse snapshot");
    snapshot["garments"]
        .as_array()
        .expect("garments array")
        .iter()
        .find(|g| g["id"] == id)
        .cloned()
        .expect("garment present")
}

#[test]
fn test_stats_json_excludes_archived() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let value = json_stdout(&env.run(&["stats", "--json"]));
    let summary = &value["summary"];
    assert_eq!(summary["total_items"], 2);
    assert_eq!(summary["total_value"], 160.0);
    assert_eq!(summary["most_worn"]["name"], "Oxford shirt");
    assert_eq!(summary["never_worn"][0]["name"], "Chinos");
    assert_eq!(summary["average_cost_per_wear"], 10.0);
    assert_eq!(summary["category_breakdown"]["tops"], 1);
    assert_eq!(value["quick_stats"]["total_wears"], 4);
    assert!(value["tip"].as_str().unwrap().contains("Wear your clothes more often"));
}

#[test]
fn test_garments_list_filters() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let bottoms = json_stdout(&env.run(&["garments", "list", "--category", "bottoms", "--json"]));
    let items = bottoms.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Chinos");
    assert!(items[0]["cost_per_wear"].is_null());

    let active = json_stdout(&env.run(&["garments", "list", "--json"]));
    assert_eq!(active.as_array().unwrap().len(), 2);

    let all = json_stdout(&env.run(&["garments", "list", "--archived", "--json"]));
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[test]
fn test_garment_show_by_prefix() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let shirt = json_stdout(&env.run(&["garments", "show", "1111", "--json"]));
    assert_eq!(shirt["id"], SHIRT);
    assert_eq!(shirt["cost_per_wear"], 10.0);
}

#[test]
fn test_garment_wear_is_saved() {
    let env = Env::new();
    let path = env.write_snapshot(&fixture());

    let output = env.run(&["garments", "wear", SHIRT, "--date", "2024-06-01"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("status=ok"));

    let shirt = garment_from_disk(&path, SHIRT);
    assert_eq!(shirt["times_worn"], 5);
    assert_eq!(shirt["last_worn"], "2024-06-01");
}

#[test]
fn test_outfit_wear_fans_out_to_garments() {
    let env = Env::new();
    let path = env.write_snapshot(&fixture());

    let before = json_stdout(&env.run(&["outfits", "show", OUTFIT, "--json"]));
    assert_eq!(before["projected"], true);
    assert_eq!(before["cost_per_wear"], 160.0);

    let output = env.run(&["outfits", "wear", "3333", "--date", "2024-06-02"]);
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(garment_from_disk(&path, SHIRT)["times_worn"], 5);
    assert_eq!(garment_from_disk(&path, PANTS)["times_worn"], 1);

    let after = json_stdout(&env.run(&["outfits", "show", OUTFIT, "--json"]));
    assert_eq!(after["wear_count"], 1);
    assert_eq!(after["projected"], false);
    assert_eq!(after["cost_per_wear"], 160.0);
}

#[test]
fn test_outfits_list_json_totals() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let value = json_stdout(&env.run(&["outfits", "list", "--occasion", "work", "--json"]));
    assert_eq!(value["total_outfits"], 1);
    assert_eq!(value["outfits"][0]["total_cost"], 160.0);

    let none = json_stdout(&env.run(&["outfits", "list", "--occasion", "party", "--json"]));
    assert_eq!(none["total_outfits"], 0);
}

#[test]
fn test_archive_with_yes() {
    let env = Env::new();
    let path = env.write_snapshot(&fixture());

    let output = env.run(&["garments", "archive", PANTS, "--yes"]);
    assert!(output.status.success());

    let pants = garment_from_disk(&path, PANTS);
    assert_eq!(pants["status"], "archived");

    let active = json_stdout(&env.run(&["garments", "list", "--json"]));
    assert_eq!(active.as_array().unwrap().len(), 1);
}

#[test]
fn test_archive_without_confirmation_is_refused() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let output = env.run(&["garments", "archive", PANTS]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_forgotten_and_context() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let forgotten = json_stdout(&env.run(&["forgotten", "--limit", "1", "--json"]));
    let items = forgotten.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Chinos");

    let context = json_stdout(&env.run(&["context"]));
    assert_eq!(context["wardrobe_count"], 2);
    assert_eq!(context["outfit_count"], 1);
    assert_eq!(context["category_counts"]["bottoms"], 1);
}

#[test]
fn test_missing_garment_exits_not_found() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let output = env.run(&["garments", "show", "99999999-9999-4999-8999-999999999999"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Garment not found"));
}

#[test]
fn test_bad_category_exits_invalid_input() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let output = env.run(&["garments", "list", "--category", "capes"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_check_passes_on_clean_snapshot() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let value = json_stdout(&env.run(&["check", "--json"]));
    assert_eq!(value["status"], "ok");
    assert_eq!(value["garments"], 3);
}

#[test]
fn test_check_reports_dangling_reference_and_rejects() {
    let env = Env::new();
    let mut body = fixture();
    body["outfits"][0]["items"]
        .as_array_mut()
        .unwrap()
        .push(json!("55555555-5555-4555-8555-555555555555"));
    body["garments"]
        .as_array_mut()
        .unwrap()
        .push(json!({"id": "66666666-6666-4666-8666-666666666666", "category": "tops", "color": "red", "times_worn": -2}));
    env.write_snapshot(&body);

    let output = env.run(&["check", "--json"]);
    assert_eq!(output.status.code(), Some(6));
    let value: Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(value["status"], "failed");
    assert_eq!(value["rejected"].as_array().unwrap().len(), 1);
    assert_eq!(value["issues"][0]["kind"], "dangling_reference");
}

#[test]
fn test_missing_snapshot_exits_not_found() {
    let env = Env::new();

    let output = env.run(&["stats"]);
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("wardrobe init"));
}

#[test]
fn test_init_then_stats_uses_config() {
    let env = Env::new();
    let snapshot = env.dir.path().join("closet").join("mine.json");

    let output = env
        .command()
        .args(["init", snapshot.to_str().unwrap()])
        .output()
        .expect("run init");
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(snapshot.exists());
    assert!(env.dir.path().join("config/wardrobe/config.toml").exists());

    let again = env
        .command()
        .args(["init", snapshot.to_str().unwrap()])
        .output()
        .expect("run init again");
    assert_eq!(again.status.code(), Some(1));

    let stats = env
        .command()
        .args(["stats", "--json"])
        .output()
        .expect("run stats");
    let value = json_stdout(&stats);
    assert_eq!(value["summary"]["total_items"], 0);
    assert_eq!(value["summary"]["sustainability"]["score"], 0);
}

#[test]
fn test_verbose_flag_shows_cli_events() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let quiet = env.run(&["garments", "wear", SHIRT, "--date", "2024-06-01"]);
    assert!(quiet.status.success());
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("logged garment wear"));

    let verbose = env.run(&["-v", "garments", "wear", SHIRT, "--date", "2024-06-02"]);
    assert!(verbose.status.success());
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("logged garment wear"), "stderr was: {}", stderr);
}

#[test]
fn test_garment_add_is_saved() {
    let env = Env::new();
    let path = env.write_snapshot(&fixture());

    let added = json_stdout(&env.run(&[
        "garments", "add", "Linen blazer", "--category", "blazer", "--color", "Beige",
        "--price", "85.5", "--season", "summer", "--json",
    ]));
    assert_eq!(added["category"], "outerwear");
    assert_eq!(added["garment_type"], "blazer");
    assert_eq!(added["primary_color"], "beige");
    assert_eq!(added["wear_count"], 0);
    assert!(added["cost_per_wear"].is_null());

    let id = added["id"].as_str().unwrap();
    let on_disk = garment_from_disk(&path, id);
    assert_eq!(on_disk["name"], "Linen blazer");
    assert_eq!(on_disk["purchase_price"], 85.5);

    let active = json_stdout(&env.run(&["garments", "list", "--json"]));
    assert_eq!(active.as_array().unwrap().len(), 3);
}

#[test]
fn test_garment_add_negative_price_is_rejected() {
    let env = Env::new();
    let path = env.write_snapshot(&fixture());
    let before = std::fs::read(&path).unwrap();

    let output = env.run(&[
        "garments", "add", "Cheap tee", "--category", "tops", "--color", "white", "--price", "-5",
    ]);
    assert_eq!(output.status.code(), Some(4));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_outfit_create_resolves_prefixes() {
    let env = Env::new();
    env.write_snapshot(&fixture());

    let created = json_stdout(&env.run(&[
        "outfits", "create", "Weekend", "--item", "1111", "--item", "2222", "--occasion",
        "casual_outing", "--season", "fall", "--json",
    ]));
    assert_eq!(created["items"], json!([SHIRT, PANTS]));
    assert_eq!(created["total_cost"], 160.0);
    assert_eq!(created["projected"], true);

    let listed = json_stdout(&env.run(&["outfits", "list", "--json"]));
    assert_eq!(listed["total_outfits"], 2);
}

#[test]
fn test_outfit_create_with_unknown_garment_exits_not_found() {
    let env = Env::new();
    let path = env.write_snapshot(&fixture());
    let before = std::fs::read(&path).unwrap();

    let output = env.run(&[
        "outfits", "create", "Ghost", "--item", SHIRT, "--item",
        "99999999-9999-4999-8999-999999999999",
    ]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Garment not found"));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn test_unreadable_config_falls_back_with_warning() {
    let env = Env::new();
    env.write_snapshot(&fixture());
    let config_dir = env.dir.path().join("config").join("wardrobe");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "this is = = not toml").unwrap();

    let output = env.run(&["garments", "show", SHIRT]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("$40.00"), "stdout was: {}", stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ignoring unreadable config file"), "stderr was: {}", stderr);
}
