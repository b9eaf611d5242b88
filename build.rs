use std::process::Command;

fn main() {
    // Only rebuild CSS when template or CSS files change
    println!("cargo:rerun-if-changed=assets/css/input.css");
    println!("cargo:rerun-if-changed=templates/");

    // Try to run Tailwind CSS standalone CLI
    let status = Command::new("tailwindcss")
        .args([
            "-i",
            "assets/css/input.css",
            "-o",
            "assets/css/output.css",
            "--minify",
        ])
        .status();

    match status {
        Ok(s) if s.success() => {
            println!("cargo:warning=Tailwind CSS compiled successfully");
        }
        _ => {
            // Tailwind CLI not available, write the plain stylesheet instead
            println!("cargo:warning=Tailwind CLI not found, using fallback CSS");
            let fallback = r#"*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: system-ui, -apple-system, sans-serif; line-height: 1.6; color: #1c1917; background: #fafaf9; -webkit-font-smoothing: antialiased; }
[hidden] { display: none !important; }
.min-h-screen { min-height: 100vh; }
.mx-auto { margin-left: auto; margin-right: auto; }
.max-w-4xl { max-width: 56rem; }
.max-w-md { max-width: 28rem; }
.w-full { width: 100%; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }
.py-3 { padding-top: 0.75rem; padding-bottom: 0.75rem; }
.py-8 { padding-top: 2rem; padding-bottom: 2rem; }
.py-16 { padding-top: 4rem; padding-bottom: 4rem; }
.mb-2 { margin-bottom: 0.5rem; }
.mb-4 { margin-bottom: 1rem; }
.mt-1 { margin-top: 0.25rem; }
.mt-4 { margin-top: 1rem; }
.flex { display: flex; }
.items-center { align-items: center; }
.justify-between { justify-content: space-between; }
.gap-3 { gap: 0.75rem; }
.gap-4 { gap: 1rem; }
.text-center { text-align: center; }
.text-xs { font-size: 0.75rem; }
.text-sm { font-size: 0.875rem; }
.text-lg { font-size: 1.125rem; }
.text-xl { font-size: 1.25rem; }
.font-medium { font-weight: 500; }
.font-semibold { font-weight: 600; }
.font-bold { font-weight: 700; }
.truncate { max-width: 200px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.text-stone-500 { color: #78716c; }
.text-stone-600 { color: #57534e; }
.text-stone-900 { color: #1c1917; }
.text-danger { color: #dc2626; }
.bg-white { background-color: #fff; }
.bg-stone-50 { background-color: #fafaf9; }
.border-b { border-bottom: 1px solid; }
.border-stone-200 { border-color: #e7e5e4; }
a { color: inherit; text-decoration: none; }
a:hover { opacity: 0.8; }
.btn { display: inline-flex; align-items: center; justify-content: center; padding: 0.5rem 1rem; border-radius: 0.5rem; font-size: 0.875rem; font-weight: 500; cursor: pointer; border: none; }
.btn-primary { background: #2563eb; color: #fff; }
.btn-primary:hover { background: #1d4ed8; }
.btn-primary:disabled { background: #d6d3d1; color: #78716c; cursor: not-allowed; }
.btn-secondary { background: #fff; color: #1c1917; border: 1px solid #d6d3d1; }
.btn-remove { position: absolute; top: 0.5rem; right: 0.5rem; width: 2rem; height: 2rem; border-radius: 0.5rem; border: none; background: #fff; cursor: pointer; box-shadow: 0 1px 3px rgb(0 0 0 / 0.15); }
.btn-remove:hover { background: #fef2f2; color: #dc2626; }
.card { display: block; background: #fff; border-radius: 0.75rem; border: 1px solid #e7e5e4; padding: 1.5rem; box-shadow: 0 1px 2px 0 rgb(0 0 0 / 0.05); }
.input { display: block; width: 100%; padding: 0.5rem 0.75rem; border: 1px solid #d6d3d1; border-radius: 0.375rem; font-size: 1rem; }
.notice { padding: 0.75rem; border-radius: 0.375rem; font-size: 0.875rem; }
.notice-success { background: #f0fdf4; border: 1px solid #bbf7d0; color: #166534; }
.child-grid { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); }
.child-card { position: relative; }
.avatar { width: 5rem; height: 5rem; border-radius: 1rem; object-fit: cover; flex-shrink: 0; }
.avatar-sm { width: 3rem; height: 3rem; border-radius: 0.5rem; }
.avatar-fallback { display: flex; align-items: center; justify-content: center; background: #2563eb; color: #fff; font-weight: 700; font-size: 1.25rem; }
.badge { display: inline-flex; padding: 0.125rem 0.625rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 500; background: #f5f5f4; color: #44403c; }
.badge-success { background: #22c55e; color: #fff; }
.badge-danger { background: #dc2626; color: #fff; }
.badge-muted { background: #f5f5f4; color: #44403c; }
.badge-info { background: #dbeafe; color: #1e40af; }
.badge-outline { background: transparent; border: 1px solid #d6d3d1; }
.empty-state { padding: 2rem; border: 2px dashed #d6d3d1; border-radius: 0.5rem; text-align: center; color: #78716c; }
.table { width: 100%; border-collapse: collapse; font-size: 0.875rem; background: #fff; border: 1px solid #e7e5e4; border-radius: 0.375rem; }
.table th, .table td { padding: 0.5rem 0.75rem; text-align: left; border-bottom: 1px solid #f5f5f4; }
.table th { font-weight: 500; color: #78716c; }
.tabs { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.25rem; background: #f5f5f4; border-radius: 0.5rem; padding: 0.25rem; }
.tab { text-align: center; font-size: 0.75rem; font-weight: 500; border-radius: 0.375rem; padding: 0.5rem; color: #78716c; }
.tab-active { background: #fff; color: #1c1917; box-shadow: 0 1px 3px rgb(0 0 0 / 0.1); }
.spinner { width: 4rem; height: 4rem; margin: 0 auto; border: 4px solid #2563eb; border-top-color: transparent; border-radius: 9999px; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;
            std::fs::create_dir_all("assets/css").ok();
            std::fs::write("assets/css/output.css", fallback).ok();
        }
    }
}
