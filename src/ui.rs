pub fn render_index(domains: &str) -> String {
    INDEX_HTML.replace("{{DOMAINS}}", domains)
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>OJ Companion</title>
  <style>
    :root {
      --bg-1: #f4f6fb;
      --bg-2: #dbe4f5;
      --ink: #24292e;
      --accent: #2196f3;
      --pass: #25ad40;
      --fail: #d32f2f;
      --muted: #888888;
      --card: #ffffff;
      --shadow: 0 2px 10px rgba(0, 0, 0, 0.12);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), var(--bg-2));
      color: var(--ink);
      font-family: "Segoe UI", "PingFang SC", sans-serif;
      padding: 28px 18px 48px;
    }

    .layout {
      width: min(1080px, 100%);
      margin: 0 auto;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
      gap: 20px;
    }

    header { grid-column: 1 / -1; }
    h1 { margin: 0 0 4px; font-size: 1.7rem; }
    .subtitle { margin: 0; color: #5f6b7a; font-size: 0.95rem; }

    .panel {
      background: var(--card);
      border-radius: 8px;
      box-shadow: var(--shadow);
      padding: 18px;
    }

    .panel h2 {
      margin: 0 0 12px;
      font-size: 1.15rem;
      border-bottom: 1px solid #e3e6ea;
      padding-bottom: 8px;
    }

    .event, .problem-card {
      padding: 10px;
      border-bottom: 1px solid #eee;
    }

    .event-name { font-weight: bold; }
    .event-meta { color: #5f6b7a; font-size: 0.85rem; }

    .tier {
      display: inline-block;
      padding: 1px 8px;
      margin-left: 8px;
      border-radius: 10px;
      font-size: 0.78rem;
      color: #fff;
    }
    .tier-ended { background: var(--muted); }
    .tier-urgent { background: var(--fail); }
    .tier-soon { background: #ff9800; }
    .tier-upcoming { background: var(--accent); }
    .tier-distant { background: #607d8b; }

    .problem-card { border: 1px solid #eee; border-radius: 8px; margin-bottom: 10px; }
    .problem-card a { color: var(--fail); font-weight: bold; text-decoration: none; }
    .problem-status {
      display: inline-block;
      margin-top: 4px;
      padding: 2px 10px;
      border-radius: 4px;
      font-size: 0.9rem;
      background: #ffebee;
      color: var(--fail);
    }
    .problem-time { color: #999; font-size: 0.8rem; margin-top: 4px; }

    .dots { display: inline-flex; gap: 4px; margin-left: 8px; }
    .dot {
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      background: var(--muted);
    }
    .dot.pass { background: var(--pass); }
    .contest-row { padding: 8px 0; border-bottom: 1px solid #eee; word-break: break-all; }

    form { margin-top: 14px; padding: 10px; border: 1px dashed #ccc; border-radius: 6px; }
    form label { display: block; margin: 6px 0 2px; font-size: 0.85rem; }
    input, textarea, select {
      width: 100%;
      padding: 6px;
      border: 1px solid #ccd3da;
      border-radius: 4px;
      font: inherit;
    }
    textarea { min-height: 72px; resize: vertical; }

    button {
      margin-top: 10px;
      padding: 6px 14px;
      border: none;
      border-radius: 4px;
      background: var(--accent);
      color: #fff;
      cursor: pointer;
      font: inherit;
    }
    button.danger { background: var(--fail); }
    button.quiet { background: var(--muted); }
    .delete-event { margin-top: 0; padding: 2px 8px; font-size: 0.8rem; }

    .status-line { min-height: 1.2em; margin-top: 8px; font-size: 0.85rem; }
    .status-line.error { color: var(--fail); }
    .empty { color: #666; padding: 8px 0; }
  </style>
</head>
<body>
  <div class="layout">
    <header>
      <h1>OJ Companion</h1>
      <p class="subtitle">watching: {{DOMAINS}}</p>
    </header>

    <section class="panel">
      <h2>Countdown</h2>
      <div id="countdown-list"><div class="empty">Loading…</div></div>
      <div id="countdown-status" class="status-line"></div>
      <form id="add-event-form">
        <label for="event-name">Name</label>
        <input id="event-name" name="name" required />
        <label for="event-date">Date</label>
        <input id="event-date" name="date" type="date" required />
        <label for="event-remark">Remark</label>
        <input id="event-remark" name="remark" />
        <button type="submit">Add event</button>
      </form>
    </section>

    <section class="panel">
      <h2>Recently failed problems</h2>
      <label for="failed-limit">Show</label>
      <select id="failed-limit">
        <option value="5" selected>5</option>
        <option value="10">10</option>
        <option value="20">20</option>
      </select>
      <div id="failed-list"><div class="empty">Loading cached records…</div></div>
      <div id="failed-status" class="status-line"></div>
      <button id="failed-refresh">Crawl now</button>
    </section>

    <section class="panel">
      <h2>Contest correction</h2>
      <label for="contest-links">Contest links, one per line</label>
      <textarea id="contest-links" placeholder="http://cplusoj.com/d/senior/contest/xyz"></textarea>
      <button id="contest-check">Check</button>
      <button id="contest-reset" class="quiet">Reset cache</button>
      <div id="contest-list"></div>
      <div id="contest-status" class="status-line"></div>
    </section>
  </div>

  <script>
    const el = (tag, className, text) => {
      const node = document.createElement(tag);
      if (className) node.className = className;
      if (text !== undefined) node.textContent = text;
      return node;
    };

    const setStatus = (id, message, isError) => {
      const line = document.getElementById(id);
      line.textContent = message || '';
      line.classList.toggle('error', Boolean(isError));
    };

    const renderCountdown = (payload) => {
      const list = document.getElementById('countdown-list');
      list.replaceChildren();
      if (payload.events.length === 0) {
        list.appendChild(el('div', 'empty', 'No events yet.'));
      }
      payload.events.forEach((event) => {
        const item = el('div', 'event');
        const title = el('div', 'event-name', event.name);
        const tier = el('span', 'tier tier-' + event.tier,
          event.is_past ? 'ended' : event.days_remaining + 'd');
        title.appendChild(tier);
        item.appendChild(title);
        const meta = event.date + (event.is_fixed ? ' · fixed' : '') +
          (event.remark ? ' · ' + event.remark : '');
        item.appendChild(el('div', 'event-meta', meta));
        if (!event.is_fixed) {
          const remove = el('button', 'danger delete-event', 'Delete');
          remove.addEventListener('click', () => {
            deleteEvent(event.id)
              .catch((err) => setStatus('countdown-status', err.message, true));
          });
          item.appendChild(remove);
        }
        list.appendChild(item);
      });
      setStatus('countdown-status', payload.fixed_error
        ? 'Fixed events unavailable: ' + payload.fixed_error : '',
        Boolean(payload.fixed_error));
    };

    const loadCountdown = async () => {
      const res = await fetch('/api/countdown');
      if (!res.ok) throw new Error(await res.text() || 'Unable to load countdown');
      renderCountdown(await res.json());
    };

    const deleteEvent = async (id) => {
      const res = await fetch('/api/events/' + encodeURIComponent(id), { method: 'DELETE' });
      if (!res.ok) throw new Error(await res.text() || 'Delete failed');
      await loadCountdown();
    };

    const renderFailed = (records) => {
      const list = document.getElementById('failed-list');
      list.replaceChildren();
      if (records.length === 0) {
        list.appendChild(el('div', 'empty', 'No unresolved problems.'));
        return;
      }
      records.forEach((record) => {
        const card = el('div', 'problem-card');
        const link = el('a', null, record.problem_id + ' ' + record.problem_name);
        link.href = record.url;
        link.target = '_blank';
        card.appendChild(link);
        card.appendChild(el('div', 'problem-status', record.status_text));
        card.appendChild(el('div', 'problem-time', record.submit_time_label));
        list.appendChild(card);
      });
    };

    const loadFailed = async (crawl) => {
      const limit = document.getElementById('failed-limit').value;
      const url = crawl ? '/api/failed?limit=' + limit : '/api/failed/cached';
      setStatus('failed-status', crawl ? 'Crawling…' : '');
      const res = await fetch(url);
      if (!res.ok) throw new Error(await res.text() || 'Unable to load records');
      renderFailed(await res.json());
      setStatus('failed-status', '');
    };

    const renderContests = (payload) => {
      const list = document.getElementById('contest-list');
      list.replaceChildren();
      payload.contests.forEach((contest) => {
        const row = el('div', 'contest-row', contest.link);
        if (contest.error) {
          row.appendChild(el('div', 'status-line error', contest.error));
        } else {
          const dots = el('span', 'dots');
          contest.dots.forEach((dot, index) => {
            const mark = el('span', dot.passed ? 'dot pass' : 'dot');
            mark.title = 'Problem ' + (index + 1) + ': ' + dot.score + ' ' + dot.status;
            dots.appendChild(mark);
          });
          row.appendChild(dots);
        }
        list.appendChild(row);
      });
    };

    const checkContests = async () => {
      const links = document.getElementById('contest-links').value
        .split('\n').map((line) => line.trim()).filter(Boolean);
      setStatus('contest-status', 'Fetching…');
      const res = await fetch('/api/contests/status', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ links })
      });
      if (!res.ok) throw new Error(await res.text() || 'Check failed');
      renderContests(await res.json());
      setStatus('contest-status', '');
    };

    document.getElementById('add-event-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const form = event.target;
      fetch('/api/events', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          name: form.name.value,
          date: form.date.value,
          remark: form.remark.value || null
        })
      }).then(async (res) => {
        if (!res.ok) throw new Error(await res.text() || 'Add failed');
        form.reset();
        return loadCountdown();
      }).catch((err) => setStatus('countdown-status', err.message, true));
    });

    document.getElementById('failed-refresh').addEventListener('click', () => {
      loadFailed(true).catch((err) => setStatus('failed-status', err.message, true));
    });

    document.getElementById('contest-check').addEventListener('click', () => {
      checkContests().catch((err) => setStatus('contest-status', err.message, true));
    });

    document.getElementById('contest-reset').addEventListener('click', () => {
      fetch('/api/contests/reset', { method: 'POST' })
        .then(() => setStatus('contest-status', 'Cache cleared'))
        .catch((err) => setStatus('contest-status', err.message, true));
    });

    loadCountdown().catch((err) => setStatus('countdown-status', err.message, true));
    loadFailed(false).catch((err) => setStatus('failed-status', err.message, true));

    // Day boundaries and fresh fixed events: refetch once a minute.
    setInterval(() => {
      loadCountdown().catch((err) => setStatus('countdown-status', err.message, true));
    }, 60000);
  </script>
</body>
</html>
"##;
