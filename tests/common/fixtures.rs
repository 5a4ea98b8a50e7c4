//! Test fixtures - reusable content for tests.

#![allow(dead_code)]

/// Merged manifest of a plain application
pub const APP_MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.app">
  <application android:label="App"/>
</manifest>
"#;

/// Merged manifest of an instrumentation test APK
pub const TEST_MANIFEST: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<manifest xmlns:android="http://schemas.android.com/apk/res/android"
    package="com.example.app.test">
  <instrumentation android:name="androidx.test.runner.AndroidJUnitRunner"
      android:targetPackage="com.example.app"/>
</manifest>
"#;
