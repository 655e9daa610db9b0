//! Property tests for command building.

use proptest::prelude::*;
use sysprep_cli::domain::ShellCommand;

proptest! {
    /// Whatever the value, the shell sees it as the single last argument.
    #[test]
    fn gsettings_value_survives_shell_splitting(value in "[^\\x00]{0,40}") {
        let cmd = ShellCommand::gsettings_set("org.gnome.desktop.interface.gtk-theme", &value)
            .expect("NUL-free values are accepted");
        let words = shlex::split(cmd.as_str()).expect("rendered command splits");
        prop_assert_eq!(words.len(), 4);
        prop_assert_eq!(&words[3], &value);
    }

    /// Package names outside the Debian alphabet never reach apt-get.
    #[test]
    fn package_names_with_shell_metacharacters_are_rejected(
        prefix in "[a-z0-9]{2,8}",
        meta in "[;&|`$() <>]",
    ) {
        let name = format!("{prefix}{meta}x");
        prop_assert!(ShellCommand::apt_install(&[name]).is_err());
    }
}
