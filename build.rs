//! Compiles the exception-catching adapter and links Vosk.
//!
//! Nothing native is built unless `vosk-static` or `vosk-dylib` is enabled.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    #[cfg(any(feature = "vosk-static", feature = "vosk-dylib"))]
    if let Err(e) = native::build() {
        panic!("failed to build the Vosk adapter: {e}");
    }
}

#[cfg(any(feature = "vosk-static", feature = "vosk-dylib"))]
mod native {
    use std::{
        env,
        error::Error,
        path::{Path, PathBuf},
    };

    type BuildResult<T> = Result<T, Box<dyn Error>>;

    const ADAPTER: &str = "csrc/wrap_catching.cc";

    #[cfg(feature = "vosk-static")]
    const VOSK_FILES: [&str; 5] = [
        "kaldi_recognizer.cc",
        "spk_model.cc",
        "model.cc",
        "vosk_api.cc",
        "language_model.cc",
    ];

    #[cfg(feature = "vosk-static")]
    const KALDI_MODULES: [&str; 16] = [
        "online2",
        "decoder",
        "ivector",
        "gmm",
        "nnet3",
        "tree",
        "feat",
        "lat",
        "lm",
        "hmm",
        "transform",
        "cudamatrix",
        "matrix",
        "fstext",
        "util",
        "base",
    ];

    pub fn build() -> BuildResult<()> {
        println!("cargo:rerun-if-env-changed=KALDI_ROOT");
        println!("cargo:rerun-if-env-changed=VOSK_SRC");
        println!("cargo:rerun-if-env-changed=VOSK_LIB_DIR");
        println!("cargo:rerun-if-changed={ADAPTER}");
        println!("cargo:rustc-cfg=vosk");

        let kaldi_root = source_dir("KALDI_ROOT", "kaldi")?;
        let vosk_src = source_dir("VOSK_SRC", "vosk-api/src")?;

        let mut build = cc::Build::new();
        build
            .cpp(true)
            .flag_if_supported("-Wno-unused-parameter")
            .flag_if_supported("-Wno-sign-compare")
            .flag_if_supported("-Wno-deprecated-copy")
            .include(kaldi_root.join("src"))
            .include(kaldi_root.join("tools/openfst/include"))
            .include(&vosk_src)
            .file(ADAPTER);

        #[cfg(feature = "vosk-static")]
        {
            add_vosk_sources(&mut build, &vosk_src);
            build.static_flag(true);
        }

        build.compile("vosk_wrap");

        #[cfg(feature = "vosk-static")]
        link_static(&kaldi_root)?;

        #[cfg(all(feature = "vosk-dylib", not(feature = "vosk-static")))]
        link_dylib();

        Ok(())
    }

    /// Resolves a source tree from `var`, falling back to `default` under the crate root.
    fn source_dir(var: &str, default: &str) -> BuildResult<PathBuf> {
        let dir = match env::var_os(var) {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(env::var("CARGO_MANIFEST_DIR")?).join(default),
        };
        if !dir.is_dir() {
            return Err(format!(
                "{} does not exist; set {var} to the directory containing the sources",
                dir.display()
            )
            .into());
        }
        Ok(dir)
    }

    #[cfg(feature = "vosk-static")]
    fn add_vosk_sources(build: &mut cc::Build, vosk_src: &Path) {
        for file in VOSK_FILES {
            let path = vosk_src.join(file);
            println!("cargo:rerun-if-changed={}", path.display());
            build.file(path);
        }
    }

    #[cfg(feature = "vosk-static")]
    fn link_static(kaldi_root: &Path) -> BuildResult<()> {
        let out_dir = PathBuf::from(env::var("OUT_DIR")?);
        let kaldi_src = kaldi_root.join("src");

        // Kaldi archives are named `kaldi-<module>.a` with no `lib` prefix.
        for module in KALDI_MODULES {
            let name = format!("kaldi-{module}");
            let from = kaldi_src.join(module).join(format!("{name}.a"));
            let to = out_dir.join(format!("lib{name}.a"));
            std::fs::copy(&from, &to)
                .map_err(|e| format!("cannot copy {}: {e}", from.display()))?;
            println!("cargo:rustc-link-lib=static={name}");
        }
        println!("cargo:rustc-link-search=native={}", out_dir.display());

        let fst_dir = kaldi_root.join("tools/openfst/lib");
        println!("cargo:rustc-link-search=native={}", fst_dir.display());
        println!("cargo:rustc-link-lib=static=fst");
        println!("cargo:rustc-link-lib=static=fstngram");

        for lib in ["lapack", "atlas", "blas", "gfortran"] {
            println!("cargo:rustc-link-lib={lib}");
        }
        Ok(())
    }

    #[cfg(all(feature = "vosk-dylib", not(feature = "vosk-static")))]
    fn link_dylib() {
        if let Some(dir) = env::var_os("VOSK_LIB_DIR") {
            println!("cargo:rustc-link-search=native={}", Path::new(&dir).display());
        }
        println!("cargo:rustc-link-lib=dylib=vosk");
    }
}
