//
// moji
//
// Copyright 2026 moji contributors
//
// This file is part of moji.
//
// moji is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// moji is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with moji. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use assert_cmd::{assert::OutputAssertExt, Command};
use rusty_fork::rusty_fork_test;
use tempfile::TempDir;

const EMOJI_TEST_EXCERPT: &str =
    include_str!("../../mojib/tests/data/emoji-test-excerpt.txt");

const FAMILY: &str = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
const WOMAN_BOUNCING_BALL: &str = "\u{26F9}\u{FE0F}\u{200D}\u{2640}\u{FE0F}";

rusty_fork_test! {
#[test]
fn test_cli_subcommands() {
    run_cli_subcommands();
}
}

type Env = BTreeMap<&'static str, PathBuf>;

fn make_common_env(temp_dir: &Path) -> Env {
    let mut common_env = BTreeMap::default();
    for (var, dir) in [
        ("HOME", temp_dir.to_path_buf()),
        ("XDG_CACHE_HOME", temp_dir.join(".cache")),
        ("XDG_STATE_HOME", temp_dir.join(".local/state")),
        ("XDG_CONFIG_HOME", temp_dir.join(".config")),
        ("XDG_DATA_HOME", temp_dir.join(".local/share")),
    ] {
        std::fs::create_dir_all(&dir).unwrap_or_else(|err| {
            panic!("Could not create {} path, {}: {}", var, dir.display(), err);
        });
        common_env.insert(var, dir);
    }
    common_env
}

fn moji(env: &Env) -> Command {
    let mut cmd = Command::cargo_bin("moji").unwrap();
    cmd.env_clear().envs(env);
    cmd
}

fn version(env: &Env) {
    // --version is successful
    for arg in ["--version", "-v"] {
        let output = moji(env).arg(arg).output().unwrap().assert();
        output.code(0).stdout(predicates::str::starts_with("moji "));
    }
}

fn help(env: &Env) {
    // --help is successful
    for arg in ["--help", "-h"] {
        let output = moji(env).arg(arg).output().unwrap().assert();
        output
            .code(0)
            .stdout(predicates::str::contains("emoji sequence classifier"))
            .stdout(predicates::str::contains("USAGE"))
            .stdout(predicates::str::contains("SUBCOMMANDS"))
            .stdout(predicates::str::contains("classify"))
            .stdout(predicates::str::contains("encode"))
            .stdout(predicates::str::contains("decode"))
            .stdout(predicates::str::contains("checksum"))
            .stdout(predicates::str::contains("hashes"))
            .stdout(predicates::str::contains("test"))
            .stdout(predicates::str::contains("fetch"))
            .stdout(predicates::str::contains("print-config-path"))
            .stdout(predicates::str::contains("print-default-config"))
            .stdout(predicates::str::contains("print-data-path"));
    }
}

fn paths(env: &Env, tmp_dir: &Path) {
    let output = moji(env).arg("print-config-path").output().unwrap().assert();
    output.code(0).stdout(predicates::str::diff(format!(
        "{}\n",
        tmp_dir.join(".config/moji/config.toml").display()
    )));

    let output = moji(env).arg("print-data-path").output().unwrap().assert();
    output.code(0).stdout(predicates::str::diff(format!(
        "{}\n",
        tmp_dir.join(".cache/moji/emoji-test.txt").display()
    )));

    let data = tmp_dir.join("elsewhere.txt");
    let output = moji(env)
        .arg("--data")
        .arg(&data)
        .arg("print-data-path")
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout(predicates::str::diff(format!("{}\n", data.display())));

    let output = moji(env).arg("print-default-config").output().unwrap().assert();
    output
        .code(0)
        .stdout(predicates::str::contains("[data]"))
        .stdout(predicates::str::contains(
            "url = \"https://unicode.org/Public/emoji/15.1/emoji-test.txt\"",
        ))
        .stdout(predicates::str::contains("level = \"WARN\""));
}

fn config(env: &Env, tmp_dir: &Path) {
    let conf = tmp_dir.join("custom.toml");
    std::fs::write(&conf, "[data]\npath = \"/srv/emoji-test.txt\"\n").unwrap();
    let output = moji(env)
        .arg("-c")
        .arg(&conf)
        .arg("print-data-path")
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout("/srv/emoji-test.txt\n");

    std::fs::write(&conf, "[data]\nmirror = \"https://example.com\"\n").unwrap();
    let output = moji(env)
        .arg("-c")
        .arg(&conf)
        .args(["encode", "x"])
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("Invalid configuration file"))
        .stderr(predicates::str::contains("Error kind: Configuration"));

    let output = moji(env)
        .arg("-c")
        .arg(tmp_dir.join("missing.toml"))
        .args(["encode", "x"])
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stderr(predicates::str::contains("does not exist"));
}

fn encode_decode(env: &Env, data: &Path) {
    let output = moji(env)
        .args(["encode", WOMAN_BOUNCING_BALL])
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout("0x009BE40000000006\n");

    let output = moji(env)
        .args(["encode", FAMILY])
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout("0x07D1A3A74FB00000\n");

    // no extra components, no data file needed
    let output = moji(env)
        .args(["decode", "0x009BE40000000006"])
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout(predicates::str::diff(format!("{}\n", WOMAN_BOUNCING_BALL)));

    let output = moji(env)
        .args(["decode", "0x07D1A3A74FB00000"])
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("moji fetch"));

    let output = moji(env)
        .arg("--data")
        .arg(data)
        .args(["decode", "0x07D1A3A74FB00000"])
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout(predicates::str::diff(format!("{}\n", FAMILY)));

    let output = moji(env)
        .arg("--data")
        .arg(data)
        .args(["decode", "0x07D1FFFFFFF00000"])
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stderr(predicates::str::contains("Unknown component checksum"));

    let output = moji(env)
        .args(["decode", "07D1A3A74FB00000"])
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stderr(predicates::str::contains("Invalid emoji ID"));
}

fn classify(env: &Env) {
    let output = moji(env)
        .args(["classify", "\u{1F44D}\u{1F3FD}"])
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout(
        "\u{1F44D}\u{1F3FD}\t0x07D1340000000180\tU+1F44D\t[]\tmedium\t-\t0\t0x00000000\n",
    );

    let output = moji(env)
        .args(["classify", "--json", FAMILY])
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::contains("\"id\":\"0x07D1A3A74FB00000\""))
        .stdout(predicates::str::contains(
            "\"extra_components\":[128105,128103]",
        ))
        .stdout(predicates::str::contains("\"checksum\":3922979840"));
}

fn checksum(env: &Env) {
    let output = moji(env)
        .args(["checksum", "1F469", "1F467"])
        .output()
        .unwrap()
        .assert();
    output.code(0).stdout("0xE9D3EC00\n");

    let output = moji(env).args(["checksum", "U+ZZZ"]).output().unwrap().assert();
    output
        .code(1)
        .stderr(predicates::str::contains("Invalid codepoint `U+ZZZ`"));
}

fn hashes(env: &Env, data: &Path) {
    let output = moji(env)
        .arg("--data")
        .arg(data)
        .arg("hashes")
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(concat!(
            "\u{1F441}\u{FE0F}\u{200D}\u{1F5E8}\u{FE0F}               \tU+1F441     \tU+1F5E8                            \t0x417843A9\n",
            "\u{1F9D1}\u{1F3FB}\u{200D}\u{1F91D}\u{200D}\u{1F9D1}\u{1F3FF}             \tU+1F9D1     \tU+1F91D, U+1F9D1                   \t0x5B5F53CD\n",
            "\u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468}            \tU+1F469     \tU+2764, U+1F48B, U+1F468           \t0x6F4F3261\n",
            "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}               \tU+1F468     \tU+1F469, U+1F467                   \t0xE9D3EC00\n",
            "\u{2764}\u{FE0F}\u{200D}\u{1F525}                \tU+2764      \tU+1F525                            \t0x2D3F55E3\n",
            "\u{1F43B}\u{200D}\u{2744}\u{FE0F}                \tU+1F43B     \tU+2744                             \t0xF7EA938C\n",
            "\u{1F3F4}\u{200D}\u{2620}\u{FE0F}                \tU+1F3F4     \tU+2620                             \t0x9A52E21B\n",
        ))
        .stderr(predicates::str::contains("Emoji"))
        .stderr(predicates::str::contains(
            "Found 7 sequences with extra components.",
        ));
}

fn round_trip(env: &Env, data: &Path, tmp_dir: &Path) {
    let output = moji(env)
        .arg("--data")
        .arg(data)
        .arg("test")
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::contains(
            "SKIP flag: United States (fully-qualified)",
        ))
        .stdout(predicates::str::contains(
            "\n11 passed, 0 failed, 1 not representable\n",
        ));

    let output = moji(env)
        .arg("--data")
        .arg(data)
        .args(["test", "--all"])
        .output()
        .unwrap()
        .assert();
    output
        .code(0)
        .stdout(predicates::str::contains(
            "SKIP man running: light skin tone (minimally-qualified)",
        ))
        .stdout(predicates::str::contains("14 passed, 0 failed, 2 not representable"));

    // Same extra components twice, the table keeps the spelling without VS16.
    let conflicting = tmp_dir.join("conflicting.txt");
    std::fs::write(
        &conflicting,
        "1F469 200D 2764 200D 1F48B 200D 1F468 ; fully-qualified # \u{1F469}\u{200D}\u{2764}\u{200D}\u{1F48B}\u{200D}\u{1F468} E2.0 kiss: bare\n\
         1F469 200D 2764 FE0F 200D 1F48B 200D 1F468 ; fully-qualified # \u{1F469}\u{200D}\u{2764}\u{FE0F}\u{200D}\u{1F48B}\u{200D}\u{1F468} E2.0 kiss: woman, man\n",
    )
    .unwrap();
    let output = moji(env)
        .arg("--data")
        .arg(&conflicting)
        .arg("test")
        .output()
        .unwrap()
        .assert();
    output
        .code(1)
        .stdout(predicates::str::contains("FAIL kiss: woman, man (fully-qualified)"))
        .stdout(predicates::str::contains("1 passed, 1 failed, 0 not representable"))
        .stderr(predicates::str::contains(
            "1 of 2 sequences did not survive the round trip.",
        ));
}

fn fetch_cached(env: &Env, tmp_dir: &Path) {
    let cached = tmp_dir.join(".cache/moji/emoji-test.txt");
    std::fs::create_dir_all(cached.parent().unwrap()).unwrap();
    std::fs::write(&cached, EMOJI_TEST_EXCERPT).unwrap();

    let output = moji(env).arg("fetch").output().unwrap().assert();
    output.code(0).stdout(predicates::str::diff(format!("{}\n", cached.display())));

    // the cached file is now the default data file
    let output = moji(env).arg("hashes").output().unwrap().assert();
    output
        .code(0)
        .stderr(predicates::str::contains("Found 7 sequences"));
}

fn run_cli_subcommands() {
    let tmp_dir = TempDir::new().unwrap();
    let env = make_common_env(tmp_dir.path());
    let data = tmp_dir.path().join("emoji-test-excerpt.txt");
    std::fs::write(&data, EMOJI_TEST_EXCERPT).unwrap();

    version(&env);
    help(&env);
    paths(&env, tmp_dir.path());
    config(&env, tmp_dir.path());
    encode_decode(&env, &data);
    classify(&env);
    checksum(&env);
    hashes(&env, &data);
    round_trip(&env, &data, tmp_dir.path());
    fetch_cached(&env, tmp_dir.path());

    tmp_dir.close().unwrap();
}
