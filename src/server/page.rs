pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Python Expert Chatbot</title>
<style>
  body { font-family: sans-serif; margin: 0; display: flex; height: 100vh; }
  aside { width: 16rem; padding: 1rem; background: #f3f4f6; font-size: 0.9rem; }
  main { flex: 1; display: flex; flex-direction: column; padding: 1rem 2rem; }
  #log { flex: 1; overflow-y: auto; }
  .turn { margin: 0.5rem 0; padding: 0.5rem 0.75rem; border-radius: 6px; white-space: pre-wrap; }
  .user { background: #e0ecff; }
  .assistant { background: #f0f0f0; }
  .pending { color: #888; font-style: italic; }
  form { display: flex; gap: 0.5rem; }
  input { flex: 1; padding: 0.5rem; }
</style>
</head>
<body>
<aside><p>Using model: <code id="model">...</code></p></aside>
<main>
  <h1>🐍 Python Expert Chatbot</h1>
  <p>Ask me anything about Python programming!</p>
  <div id="log"></div>
  <form id="ask">
    <input id="input" placeholder="Your Python question:" autocomplete="off">
  </form>
</main>
<script>
  let sessionId = null;
  const log = document.getElementById("log");

  function show(role, content, cls) {
    const div = document.createElement("div");
    div.className = "turn " + role + (cls ? " " + cls : "");
    div.textContent = content;
    log.appendChild(div);
    log.scrollTop = log.scrollHeight;
    return div;
  }

  fetch("/api/model").then(r => r.json()).then(m => {
    document.getElementById("model").textContent = m.model;
  });

  document.getElementById("ask").addEventListener("submit", async (event) => {
    event.preventDefault();
    const field = document.getElementById("input");
    const input = field.value;
    if (!input.trim()) return;
    field.value = "";
    field.disabled = true;
    show("user", input);
    const pending = show("assistant", "Thinking... 🤔", "pending");
    try {
      const res = await fetch("/api/chat", {
        method: "POST",
        headers: { "Content-Type": "application/json" },
        body: JSON.stringify({ session_id: sessionId, input }),
      });
      const body = await res.json();
      if (res.ok) {
        sessionId = body.session_id;
        pending.textContent = body.reply.content;
      } else {
        pending.textContent = "Error: " + body.error;
      }
    } catch (err) {
      pending.textContent = "Error: " + err;
    }
    pending.classList.remove("pending");
    field.disabled = false;
    field.focus();
  });
</script>
</body>
</html>
"#;
