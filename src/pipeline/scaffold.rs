//! Starter `ccs.yaml` generation
//!
//! The default scaffold is a three-task build → release → deployment chain
//! that passes validation as written. The interactive variant asks for the
//! payload values and falls back to the defaults on blank answers.

use std::io::{self, BufRead, Write};

use super::errors::PipelineError;
use super::model::{Build, Deployment, Pipeline, Release, Task, TaskAction};

/// File name `init` writes to by default.
pub const DEFAULT_FILE_NAME: &str = "ccs.yaml";

/// Values filled into the scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldAnswers {
    /// Build image or environment
    pub build_environment: String,
    /// Build command
    pub build_command: String,
    /// Release level
    pub release_level: String,
    /// Release type
    pub release_type: String,
    /// Deployment environment
    pub deployment_environment: String,
}

impl Default for ScaffoldAnswers {
    fn default() -> Self {
        Self {
            build_environment: "my-docker-image".to_string(),
            build_command: "docker build $REPOSITORY_DIR".to_string(),
            release_level: "minor".to_string(),
            release_type: "semver".to_string(),
            deployment_environment: "production".to_string(),
        }
    }
}

impl ScaffoldAnswers {
    /// Builds the pipeline these answers describe.
    #[must_use]
    pub fn to_pipeline(&self) -> Pipeline {
        Pipeline::new(vec![
            Task::new(
                "build",
                TaskAction::Build(Build::new(&self.build_environment, &self.build_command)),
            ),
            Task::new(
                "release",
                TaskAction::Release(Release::new(&self.release_level, &self.release_type)),
            )
            .needs("build"),
            Task::new(
                "deployment",
                TaskAction::Deployment(Deployment::new(&self.deployment_environment, "release")),
            )
            .needs("release"),
        ])
    }
}

/// The default scaffold pipeline.
#[must_use]
pub fn default_pipeline() -> Pipeline {
    ScaffoldAnswers::default().to_pipeline()
}

/// Renders a pipeline as YAML.
///
/// # Errors
///
/// Returns [`PipelineError::Render`] if serialization fails.
pub fn render(pipeline: &Pipeline) -> Result<String, PipelineError> {
    serde_yaml::to_string(pipeline).map_err(|e| PipelineError::Render(e.to_string()))
}

/// Asks for each scaffold value on `output`, reading answers from `input`.
///
/// # Errors
///
/// Returns any IO error from reading or writing.
pub fn prompt_answers<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<ScaffoldAnswers> {
    let defaults = ScaffoldAnswers::default();

    writeln!(output, "Enter task information for the build task:")?;
    let build_environment = prompt(input, output, "Environment", &defaults.build_environment)?;
    let build_command = prompt(input, output, "Command", &defaults.build_command)?;

    writeln!(output, "Enter task information for the release task:")?;
    let release_level = prompt(input, output, "Level", &defaults.release_level)?;
    let release_type = prompt(input, output, "Type", &defaults.release_type)?;

    writeln!(output, "Enter task information for the deployment task:")?;
    let deployment_environment =
        prompt(input, output, "Environment", &defaults.deployment_environment)?;

    Ok(ScaffoldAnswers {
        build_environment,
        build_command,
        release_level,
        release_type,
        deployment_environment,
    })
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: &str,
) -> io::Result<String> {
    write!(output, "{question} [{default}]: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{decode, validator};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn test_default_scaffold_is_valid() {
        let yaml = render(&default_pipeline()).unwrap();
        let pipeline = decode::from_yaml_str(&yaml).unwrap();
        assert_eq!(validator::validate(&pipeline), Ok(()));
        assert_eq!(pipeline, default_pipeline());
    }

    #[test]
    fn test_default_scaffold_layout() {
        let yaml = render(&default_pipeline()).unwrap();
        assert!(yaml.starts_with("apiVersion: v1\nkind: Pipeline\n"));
        assert!(yaml.contains("command: docker build $REPOSITORY_DIR"));
        assert!(yaml.contains("- name: deployment"));
    }

    #[test]
    fn test_prompt_answers() {
        let mut input = Cursor::new("node-20\nnpm run build\nmajor\ncalver\nstaging\n");
        let mut output = Vec::new();

        let answers = prompt_answers(&mut input, &mut output).unwrap();

        assert_eq!(
            answers,
            ScaffoldAnswers {
                build_environment: "node-20".to_string(),
                build_command: "npm run build".to_string(),
                release_level: "major".to_string(),
                release_type: "calver".to_string(),
                deployment_environment: "staging".to_string(),
            }
        );

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("Enter task information for the build task:"));
        assert!(transcript.contains("Enter task information for the release task:"));
        assert!(transcript.contains("Enter task information for the deployment task:"));
    }

    #[test]
    fn test_blank_answers_use_defaults() {
        let mut input = Cursor::new("\n\n\n\n\n");
        let answers = prompt_answers(&mut input, &mut io::sink()).unwrap();
        assert_eq!(answers, ScaffoldAnswers::default());
    }

    #[test]
    fn test_eof_uses_defaults() {
        let mut input = Cursor::new("only-env\n");
        let answers = prompt_answers(&mut input, &mut io::sink()).unwrap();
        assert_eq!(answers.build_environment, "only-env");
        assert_eq!(answers.build_command, ScaffoldAnswers::default().build_command);
    }

    #[test]
    fn test_interactive_scaffold_is_valid() {
        let answers = ScaffoldAnswers {
            deployment_environment: "qa".to_string(),
            ..ScaffoldAnswers::default()
        };
        let yaml = render(&answers.to_pipeline()).unwrap();
        let pipeline = decode::from_yaml_str(&yaml).unwrap();
        assert!(validator::validate(&pipeline).is_ok());
        assert!(yaml.contains("environment: qa"));
    }
}
