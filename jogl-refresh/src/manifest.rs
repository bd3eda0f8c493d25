/// Pinned copy manifest for the JOGL and GlueGen distribution files

/// Runtime and native jar archives, expected in the distribution's jar directory
pub const ARCHIVE_FILES: &[&str] = &[
    "gluegen-rt.jar",
    "gluegen-rt-natives-linux-amd64.jar",
    "gluegen-rt-natives-macosx-universal.jar",
    "gluegen-rt-natives-windows-amd64.jar",
    "jogl-all.jar",
    "jogl-all-natives-linux-amd64.jar",
    "jogl-all-natives-macosx-universal.jar",
    "jogl-all-natives-windows-amd64.jar",
];

/// License and readme files, expected one directory above the jar directory
pub const TEXT_FILES: &[&str] = &[
    "gluegen.LICENSE.txt",
    "jogl.LICENSE.txt",
    "jogl.README.txt",
];
