pub mod ops_check;
pub mod ops_generate;
pub mod ops_projects;
pub mod ops_publish;
pub mod ops_setup;

#[cfg(test)]
pub(crate) mod fixture {
    use std::fs;
    use std::path::Path;

    pub const APACHE: &str = "Apache License\nVersion 2.0, January 2004\n";

    /// A build with two catalog projects, one platform they share and one
    /// ordinary project.
    pub fn write_build(root: &Path) {
        fs::write(
            root.join("settings.gradle.kts"),
            r#"rootProject.name = "catalogs"
include(":versions:library-bom", ":versions:gradle-plugin-bom")
include(":versions:common-bom")
include(":app")
"#,
        )
        .unwrap();
        fs::write(root.join("gradle.properties"), "group=com.sphereon.gradle\nversion=0.1.0\n").unwrap();
        write(
            root,
            "versions/library-bom",
            r#"plugins {
    `java-platform`
    id("com.sphereon.gradle.toml-catalog")
}

dependencies {
    constraints {
        api(platform(project(":versions:common-bom")))
        api("co.touchlab:kermit:2.0.5")
    }
}
"#,
        );
        write(
            root,
            "versions/gradle-plugin-bom",
            r#"plugins {
    id("com.sphereon.gradle.toml-catalog")
}

dependencies {
    constraints {
        api("org.jetbrains.kotlin.jvm:2.2.20")
    }
}
"#,
        );
        write(root, "versions/common-bom", "api(\"io.ktor:ktor-io:3.3.0\")\n");
        write(root, "app", "plugins { kotlin(\"jvm\") }\n");
    }

    fn write(root: &Path, dir: &str, script: &str) {
        let dir = root.join(dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("build.gradle.kts"), script).unwrap();
    }
}
