//! Dockerfile generation for distribution build images.
//!
//! Each image layers the Java runtime and Gradle install from the
//! official `gradle:jdk8` image onto the distribution base, installs
//! the pinned compiler toolset, and re-invokes the inner build tool
//! against the mounted project tree.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::distro::{Distro, DistroImage};
use crate::util::fs::write_string;

/// Render the Dockerfile for a distribution image.
pub fn render_dockerfile(image: &DistroImage) -> String {
    let mut out = String::new();
    let toolset = &image.toolset_version;

    out.push_str("FROM gradle:jdk8 as gradle\n");

    match image.distro {
        Distro::Centos => {
            let _ = writeln!(out, "FROM centos:centos{}", image.version);
            push_jvm_layers(&mut out);
            let _ = writeln!(
                out,
                "RUN yum -y install centos-release-scl && \\\n    \
                 yum -y group install \"Development Tools\" && \\\n    \
                 yum -y install devtoolset-{toolset} && \\\n    \
                 yum clean all && \\\n    \
                 rm -rf /var/cache/yum/*"
            );
            let _ = writeln!(
                out,
                "ENV PATH=\"/opt/rh/devtoolset-{toolset}/root/usr/bin:$PATH\""
            );
        }
        Distro::Rhel => {
            let _ = writeln!(out, "FROM redhat/ubi8:{}", image.version);
            push_jvm_layers(&mut out);
            let _ = writeln!(out, "RUN dnf -y install gcc-toolset-{toolset}");
            let _ = writeln!(
                out,
                "ENV PATH=\"/opt/rh/gcc-toolset-{toolset}/root/usr/bin:$PATH\""
            );
        }
    }

    out.push_str("ENV JAVA_HOME=/opt/java/openjdk\n");
    out.push_str("WORKDIR /core/native\n");
    out.push_str("ENTRYPOINT [\"./gradlew\"]\n");
    out.push_str("CMD [\"assemble\", \"--console=plain\"]\n");

    out
}

fn push_jvm_layers(out: &mut String) {
    out.push_str("COPY --from=gradle /opt/java/openjdk/ /opt/java/openjdk\n");
    out.push_str("COPY --from=gradle /opt/gradle/ /opt/gradle\n");
}

/// Write the Dockerfile under `build/docker/<distro>/` and return the
/// directory usable as the image build context.
pub fn write_dockerfile(image: &DistroImage, build_dir: &Path) -> Result<PathBuf> {
    let context_dir = build_dir.join("docker").join(image.distro.to_string());
    let path = context_dir.join("Dockerfile");

    write_string(&path, &render_dockerfile(image))?;
    tracing::debug!("wrote {}", path.display());

    Ok(context_dir)
}
