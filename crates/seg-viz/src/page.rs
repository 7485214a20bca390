//! The embedded single-page UI.
//!
//! Plain HTML + canvas, no build step and no external assets: the page polls
//! the JSON API and redraws.  Agents are filled circles (radius half a cell);
//! unhappy agents get a thin outline so churn is visible while it lasts.

pub const PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>segsim — Schelling segregation</title>
<style>
  body { font-family: system-ui, sans-serif; margin: 1.5rem; background: #fafafa; }
  h1 { font-size: 1.2rem; }
  .controls { margin-bottom: 1rem; }
  button { padding: 0.3rem 0.9rem; margin-right: 0.4rem; }
  canvas { background: white; border: 1px solid #ccc; display: block; margin-bottom: 1rem; }
  .status { color: #555; margin-left: 0.6rem; }
</style>
</head>
<body>
<h1>Schelling segregation</h1>
<div class="controls">
  <button id="btn-start">Start</button>
  <button id="btn-step">Step</button>
  <button id="btn-reset">Reset</button>
  <span class="status" id="status"></span>
</div>
<canvas id="grid" width="500" height="500"></canvas>
<canvas id="chart" width="500" height="160"></canvas>
<script>
const gridCanvas = document.getElementById('grid');
const chartCanvas = document.getElementById('chart');
const statusEl = document.getElementById('status');
const startBtn = document.getElementById('btn-start');
let timer = null;

function drawGrid(s) {
  const ctx = gridCanvas.getContext('2d');
  ctx.clearRect(0, 0, gridCanvas.width, gridCanvas.height);
  const cell = Math.min(gridCanvas.width / s.width, gridCanvas.height / s.height);
  for (const a of s.agents) {
    ctx.beginPath();
    ctx.arc((a.x + 0.5) * cell, (a.y + 0.5) * cell, cell * 0.45, 0, 2 * Math.PI);
    ctx.fillStyle = a.color;
    ctx.fill();
    if (!a.happy) {
      ctx.strokeStyle = 'black';
      ctx.stroke();
    }
  }
}

function drawChart(s) {
  const ctx = chartCanvas.getContext('2d');
  const w = chartCanvas.width, h = chartCanvas.height;
  ctx.clearRect(0, 0, w, h);
  const series = s.happySeries;
  if (series.length === 0 || s.totalAgents === 0) return;
  ctx.beginPath();
  const dx = series.length > 1 ? w / (series.length - 1) : 0;
  series.forEach((happy, i) => {
    const y = h - (happy / s.totalAgents) * (h - 10) - 5;
    if (i === 0) ctx.moveTo(0, y); else ctx.lineTo(i * dx, y);
  });
  ctx.strokeStyle = 'black';
  ctx.stroke();
  ctx.fillStyle = '#555';
  ctx.fillText('happy agents', 8, 14);
}

function render(s) {
  drawGrid(s);
  drawChart(s);
  statusEl.textContent =
    'step ' + s.step + ' — ' + s.happyAgents + '/' + s.totalAgents +
    ' happy, ' + s.movedLastStep + ' moved (seed ' + s.seed + ')';
}

async function getState() {
  render(await (await fetch('/api/state')).json());
}

async function step() {
  render(await (await fetch('/api/step', { method: 'POST' })).json());
}

async function reset() {
  stop();
  render(await (await fetch('/api/reset', { method: 'POST' })).json());
}

function stop() {
  if (timer !== null) {
    clearInterval(timer);
    timer = null;
    startBtn.textContent = 'Start';
  }
}

startBtn.addEventListener('click', () => {
  if (timer === null) {
    timer = setInterval(step, 100);
    startBtn.textContent = 'Stop';
  } else {
    stop();
  }
});
document.getElementById('btn-step').addEventListener('click', step);
document.getElementById('btn-reset').addEventListener('click', reset);

getState();
</script>
</body>
</html>
"##;
