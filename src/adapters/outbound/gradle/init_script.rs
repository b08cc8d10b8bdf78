use crate::shared::Result;
use std::io::Write;
use std::path::Path;
use tempfile::TempPath;

/// The init script injected into every Gradle invocation.
///
/// It hooks `projectsEvaluated`, walks the resolvable configurations of the
/// root project and serializes the dependency model as JSON into the file
/// named by the `gradleResolve.outputFile` system property. Everything the
/// build prints on stdout/stderr stays diagnostic; the model travels only
/// through that file.
const INIT_SCRIPT: &str = r#"
import groovy.json.JsonOutput

def renderNode
renderNode = { dep, seen ->
    def node = [:]
    if (dep.hasProperty('selected')) {
        def id = dep.selected.moduleVersion
        node.groupId = id?.group ?: ''
        node.artifactId = id?.name ?: ''
        node.version = id?.version ?: ''
        def compId = dep.selected.id
        if (compId instanceof org.gradle.api.artifacts.component.ProjectComponentIdentifier) {
            node.localPath = compId.projectPath
        } else if (dep.selected.hasProperty('descriptorUrl') && dep.selected.descriptorUrl) {
            node.descriptorUrl = dep.selected.descriptorUrl.toString()
        }
        def key = "${node.groupId}:${node.artifactId}:${node.version}".toString()
        if (!seen.contains(key)) {
            node.dependencies = dep.selected.dependencies.collect {
                renderNode(it, seen + [key])
            }
        }
    } else {
        node.error = dep.hasProperty('failure') ? dep.failure?.message : 'unresolved dependency'
        node.groupId = dep.attempted?.group ?: ''
        node.artifactId = dep.attempted?.module ?: ''
        node.version = dep.attempted?.version ?: ''
    }
    node
}

gradle.projectsEvaluated {
    def root = gradle.rootProject
    def model = [
        group  : root.group.toString(),
        name   : root.name,
        version: root.version.toString(),
        scopes : root.configurations.findAll { it.canBeResolved }.collect { cfg ->
            [
                name        : cfg.name,
                dependencies: cfg.incoming.resolutionResult.root.dependencies.collect {
                    renderNode(it, [] as Set)
                }
            ]
        }
    ]
    new File(System.getProperty('gradleResolve.outputFile')).text = JsonOutput.toJson(model)
}
"#;

/// The temporary init-script artifact for one tooling session.
///
/// The file exists for the lifetime of this value. Dropping it deletes the
/// file silently; calling [`InitScript::cleanup`] deletes it and reports a
/// deletion failure as a warning message instead of swallowing it. Deletion
/// failure is never fatal.
#[derive(Debug)]
pub struct InitScript {
    path: TempPath,
}

impl InitScript {
    /// Writes the init script to a fresh temporary file.
    pub fn write() -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("gradle-resolve-init-")
            .suffix(".gradle")
            .tempfile()
            .map_err(|e| anyhow::anyhow!("Failed to create init script file: {}", e))?;
        file.write_all(INIT_SCRIPT.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write init script: {}", e))?;
        file.flush()
            .map_err(|e| anyhow::anyhow!("Failed to write init script: {}", e))?;
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the artifact, returning a warning message if deletion failed.
    pub fn cleanup(self) -> Option<String> {
        let display = self.path.to_path_buf();
        match self.path.close() {
            Ok(()) => None,
            Err(e) => Some(format!(
                "Could not delete temporary init script {}: {}",
                display.display(),
                e
            )),
        }
    }
}
