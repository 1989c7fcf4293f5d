// Stylesheet inlined into every rendered page.

pub const STYLESHEET: &str = r#"
:root {
    --main-blue: #1E88E5;
    --light-blue: #BBD9F2;
    --dark-blue: #0D47A1;
    --accent-blue: #64B5F6;
    --good: #28a745;
    --fair: #ffc107;
    --poor: #dc3545;
}
body { margin: 0; font-family: 'Helvetica Neue', Arial, sans-serif; background: #f4f6f9; color: #212529; }
h1, h2, h3 { color: var(--dark-blue); }
.layout { display: flex; min-height: 100vh; }
.sidebar { width: 280px; background: #fff; padding: 20px; border-right: 1px solid #dee2e6; }
.main { flex: 1; padding: 24px 40px; max-width: 1200px; }
.main-header { background-color: var(--main-blue); padding: 1.5rem; border-radius: 10px; color: #fff; text-align: center; margin-bottom: 2rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); }
.card { background: #fff; border-radius: 10px; padding: 20px; box-shadow: 0 4px 10px rgba(0,0,0,0.05); margin-bottom: 20px; }
.columns { display: flex; gap: 20px; }
.columns > * { flex: 1; }
.columns .narrow { flex: 1; }
.columns .wide { flex: 2; }
.section-header { font-size: 1.2rem; font-weight: 600; color: var(--dark-blue); margin-bottom: 15px; border-bottom: 2px solid var(--accent-blue); padding-bottom: 8px; }
textarea { width: 100%; min-height: 250px; border-radius: 8px; border: 1px solid #ced4da; padding: 10px; box-sizing: border-box; }
button { background-color: var(--main-blue); color: #fff; border-radius: 8px; padding: 10px 20px; font-weight: bold; border: none; width: 100%; cursor: pointer; }
button:hover { background-color: var(--dark-blue); }
.actions { max-width: 50%; margin: 0 auto 20px auto; }
.notice { border-radius: 8px; padding: 12px 16px; margin-bottom: 16px; }
.notice-error { background: #f8d7da; color: #842029; }
.notice-warning { background: #fff3cd; color: #664d03; }
.notice-success { background: #d1e7dd; color: #0f5132; }
.notice-info { background: #cff4fc; color: #055160; }
.keyword-pill { display: inline-block; padding: 5px 12px; margin: 5px; background-color: var(--light-blue); color: var(--dark-blue); border-radius: 20px; font-size: 14px; font-weight: 500; }
.matched-keyword { background-color: #c8e6c9; color: #2e7d32; }
.match-score { text-align: center; }
.match-progress { height: 20px; border-radius: 5px; background-color: #e9ecef; margin: 10px 0 20px 0; overflow: hidden; }
.match-progress-bar { height: 100%; text-align: center; color: #fff; font-weight: bold; line-height: 20px; }
.skill-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 10px; }
.skill { background-color: #e9f5fe; padding: 10px; border-radius: 8px; font-weight: bold; }
pre { background: #272822; color: #f8f8f2; padding: 12px; border-radius: 8px; overflow-x: auto; white-space: pre-wrap; }
.footer { text-align: center; color: #6c757d; margin-top: 2rem; padding-top: 1rem; border-top: 1px solid #dee2e6; }
"#;
