//! Fixture builders for common test scenarios.

use std::path::{Path, PathBuf};

/// Create an app directory carrying a complete Maven wrapper whose `mvnw`
/// runs the given script body. Returns the app directory.
pub fn app_with_wrapper(root: &Path, mvnw_body: &str) -> PathBuf {
    let app = root.join("app");
    let wrapper = app.join(".mvn").join("wrapper");
    std::fs::create_dir_all(&wrapper).unwrap();

    std::fs::write(app.join("mvnw"), mvnw_body).unwrap();
    std::fs::write(wrapper.join("maven-wrapper.jar"), "jar").unwrap();
    std::fs::write(
        wrapper.join("maven-wrapper.properties"),
        "distributionUrl=https://repo.maven.apache.org/maven2/\n",
    )
    .unwrap();

    app
}

/// Create a buildpack directory with the profile scripts an install expects.
/// Returns the buildpack directory.
pub fn buildpack_fixture(root: &Path) -> PathBuf {
    let buildpack = root.join("buildpack");
    let profile_d = buildpack.join("profile.d");
    std::fs::create_dir_all(&profile_d).unwrap();

    std::fs::write(
        profile_d.join("jvm.sh"),
        "export JAVA_HOME=$HOME/.jdk\nexport PATH=$JAVA_HOME/bin:$PATH\n",
    )
    .unwrap();
    std::fs::write(
        profile_d.join("jdbc.sh"),
        "export JDBC_DATABASE_URL=${DATABASE_URL:-}\n",
    )
    .unwrap();

    buildpack
}
